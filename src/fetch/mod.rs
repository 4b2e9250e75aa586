//! Template acquisition.
//!
//! Templates come from a local path or a remote URL. Remote reads go through
//! a [`Fetcher`], which [`HttpFetcher`] implements with bounded retry.

mod http;
mod retry;
mod source;

pub use http::{Fetcher, HttpFetcher};
pub use retry::RetryPolicy;
pub use source::TemplateSource;

use crate::error::{GenError, Result};
use crate::template::Template;
use tracing::debug;

/// Read a template from its source.
///
/// A local path that does not exist fails with [`GenError::Precondition`]
/// without touching anything else.
pub fn fetch_template(source: &TemplateSource, fetcher: &dyn Fetcher) -> Result<Template> {
    let text = match source {
        TemplateSource::Local(path) => {
            if !path.is_file() {
                return Err(GenError::Precondition(format!(
                    "template not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "reading local template");
            std::fs::read_to_string(path).map_err(|e| GenError::Fetch {
                location: path.display().to_string(),
                reason: e.to_string(),
            })?
        }
        TemplateSource::Remote(url) => {
            debug!(%url, "fetching remote template");
            fetcher.fetch(url)?
        }
    };

    Ok(Template::parse(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Url;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct StubFetcher {
        body: String,
        requested: RefCell<Vec<String>>,
    }

    impl Fetcher for StubFetcher {
        fn fetch(&self, url: &Url) -> Result<String> {
            self.requested.borrow_mut().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    fn stub(body: &str) -> StubFetcher {
        StubFetcher {
            body: body.to_string(),
            requested: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_remote_goes_through_fetcher() {
        let fetcher = stub("a\nb\n");
        let source = TemplateSource::parse("https://example.com/t/GridSearch.py");

        let template = fetch_template(&source, &fetcher).unwrap();

        assert_eq!(template.len(), 2);
        assert_eq!(
            fetcher.requested.borrow().as_slice(),
            &["https://example.com/t/GridSearch.py".to_string()]
        );
    }

    #[test]
    fn test_local_file_read_without_fetcher() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("template.py");
        std::fs::write(&path, "x = 1\n").unwrap();

        let fetcher = stub("unused");
        let source = TemplateSource::Local(path);
        let template = fetch_template(&source, &fetcher).unwrap();

        assert_eq!(template.render(), "x = 1\n");
        assert!(fetcher.requested.borrow().is_empty());
    }

    #[test]
    fn test_missing_local_template_is_precondition() {
        let temp_dir = TempDir::new().unwrap();
        let source = TemplateSource::Local(temp_dir.path().join("absent.py"));

        let err = fetch_template(&source, &stub("")).unwrap_err();
        assert!(matches!(err, GenError::Precondition(_)));
    }
}
