//! Output file naming.

use crate::error::{GenError, Result};
use crate::fetch::TemplateSource;
use std::path::{Component, Path};

/// File name for an event's copy of a template: `<event_tag>_<template_basename>`.
///
/// The result must be a single plain file name so the script stays inside
/// the output directory; tags with separators, `..`, or a root are rejected.
pub fn output_file_name(event_tag: &str, source: &TemplateSource) -> Result<String> {
    let name = format!("{}_{}", event_tag, source.basename()?);

    let mut components = Path::new(&name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(name),
        _ => Err(GenError::Precondition(format!(
            "event_tag '{}' does not form a plain file name",
            event_tag
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_template_name() {
        let source = TemplateSource::parse(crate::settings::DEFAULT_TEMPLATE);
        assert_eq!(
            output_file_name("E1", &source).unwrap(),
            "E1_GridSearch.FullMomentTensor.py"
        );
    }

    #[test]
    fn test_local_template_name() {
        let source = TemplateSource::parse("templates/GridSearch.DoubleCouple.py");
        assert_eq!(
            output_file_name("2009-04-07T201255_SOUTHERN_ALASKA", &source).unwrap(),
            "2009-04-07T201255_SOUTHERN_ALASKA_GridSearch.DoubleCouple.py"
        );
    }

    #[test]
    fn test_tags_with_path_components_rejected() {
        let source = TemplateSource::parse("GridSearch.py");
        for tag in ["../escaped", "/tmp/evil", "nested/dir", ".."] {
            assert!(
                matches!(
                    output_file_name(tag, &source),
                    Err(GenError::Precondition(_))
                ),
                "tag {tag:?} should be rejected"
            );
        }
    }
}
