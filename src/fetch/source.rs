//! Template locations.

use crate::error::{GenError, Result};
use reqwest::Url;
use std::fmt;
use std::path::PathBuf;

/// Where a template is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A path on the local filesystem.
    Local(PathBuf),
    /// An absolute URL with both a scheme and a host.
    Remote(Url),
}

impl TemplateSource {
    /// Classify a location string.
    ///
    /// Only strings that parse as a URL *and* name a host are remote, so
    /// `C:\templates\x.py`, `file:///x.py`, and bare relative paths are all
    /// local.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if url.host_str().is_some_and(|host| !host.is_empty()) => {
                TemplateSource::Remote(url)
            }
            _ => TemplateSource::Local(PathBuf::from(location)),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, TemplateSource::Remote(_))
    }

    /// Final path component: the file name for local paths, the last URL
    /// path segment for remote ones.
    pub fn basename(&self) -> Result<String> {
        let name = match self {
            TemplateSource::Local(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            TemplateSource::Remote(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .map(str::to_string),
        };

        name.filter(|name| !name.is_empty()).ok_or_else(|| {
            GenError::Precondition(format!("template location '{}' has no file name", self))
        })
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Local(path) => write!(f, "{}", path.display()),
            TemplateSource::Remote(url) => write!(f, "{}", url),
        }
    }
}
