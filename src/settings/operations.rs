//! Settings loading and validation.

use super::model::Settings;
use crate::error::{GenError, Result};
use std::path::Path;

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Successfully loaded and validated settings
    /// * `Err(GenError::Precondition)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GenError::Precondition(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(yaml).map_err(|e| {
            GenError::Precondition(format!("failed to parse settings YAML: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Replace the template list, e.g. from `--template` flags.
    ///
    /// An empty list leaves the configured templates in place.
    pub fn with_templates(mut self, templates: Vec<String>) -> Self {
        if !templates.is_empty() {
            self.templates = templates;
        }
        self
    }

    /// Validate settings values.
    ///
    /// Validation rules:
    /// - `templates` must be non-empty and contain no blank entries
    /// - `fetch.timeout_secs` must be positive
    /// - `fetch.initial_backoff_ms` must not exceed `fetch.max_backoff_ms`
    pub fn validate(&self) -> Result<()> {
        if self.templates.is_empty() {
            return Err(GenError::Precondition(
                "settings validation failed: templates must list at least one template"
                    .to_string(),
            ));
        }

        if self.templates.iter().any(|t| t.trim().is_empty()) {
            return Err(GenError::Precondition(
                "settings validation failed: templates entries must be non-empty".to_string(),
            ));
        }

        if self.fetch.timeout_secs == 0 {
            return Err(GenError::Precondition(
                "settings validation failed: fetch.timeout_secs must be greater than 0"
                    .to_string(),
            ));
        }

        if self.fetch.initial_backoff_ms > self.fetch.max_backoff_ms {
            return Err(GenError::Precondition(format!(
                "settings validation failed: fetch.initial_backoff_ms ({}) exceeds fetch.max_backoff_ms ({})",
                self.fetch.initial_backoff_ms, self.fetch.max_backoff_ms
            )));
        }

        Ok(())
    }
}
