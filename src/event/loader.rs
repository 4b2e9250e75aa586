//! Event file reading and parsing.

use super::model::{EventRecord, RawEventDocument};
use crate::error::{GenError, Result};
use serde_yaml::Value;
use std::path::Path;

/// Load and validate an event file.
///
/// # Arguments
///
/// * `path` - Path to the PySEP event YAML file
/// * `output_dir` - Directory used to derive default data and weights paths
///
/// # Returns
///
/// * `Ok(EventRecord)` - All required fields present
/// * `Err(GenError::Precondition)` - The file could not be read
/// * `Err(GenError::MalformedInput)` - The file is not a YAML mapping
/// * `Err(GenError::MissingField)` - A required field is absent
pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(path: P, output_dir: Q) -> Result<EventRecord> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        GenError::Precondition(format!(
            "failed to read event file '{}': {}",
            path.display(),
            e
        ))
    })?;

    from_yaml(&content, path, output_dir.as_ref())
}

/// Parse and validate an event document from a YAML string.
///
/// `source` is only used to identify the document in error messages.
pub fn from_yaml(yaml: &str, source: &Path, output_dir: &Path) -> Result<EventRecord> {
    parse_document(yaml, source)?.validate(output_dir)
}

/// Parse YAML into a raw document without validating it.
///
/// An empty or `null` document yields an empty [`RawEventDocument`], which then
/// fails validation on its first required field rather than as a parse error.
pub fn parse_document(yaml: &str, source: &Path) -> Result<RawEventDocument> {
    let malformed = |reason: String| GenError::MalformedInput {
        path: source.to_path_buf(),
        reason,
    };

    if yaml.trim().is_empty() {
        return Ok(RawEventDocument::default());
    }

    let value: Value = serde_yaml::from_str(yaml).map_err(|e| malformed(e.to_string()))?;

    match value {
        Value::Null => Ok(RawEventDocument::default()),
        Value::Mapping(mapping) => serde_yaml::from_value(Value::Mapping(mapping))
            .map_err(|e| malformed(e.to_string())),
        _ => Err(malformed("expected a mapping of event fields".to_string())),
    }
}
