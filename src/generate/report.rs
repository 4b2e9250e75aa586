//! Batch results.

use crate::error::{GenError, Result};
use crate::exit_codes;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// One generated script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedScript {
    pub template: String,
    pub output: PathBuf,
}

/// Result of processing one event file.
#[derive(Debug, Clone, Serialize)]
pub struct EventOutcome {
    pub input: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_tag: Option<String>,

    pub written: Vec<GeneratedScript>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip)]
    exit_code: i32,
}

impl EventOutcome {
    pub fn new(input: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            event_tag: None,
            written: Vec::new(),
            error: None,
            exit_code: exit_codes::SUCCESS,
        }
    }

    pub fn fail(&mut self, err: &GenError) {
        self.error = Some(err.to_string());
        self.exit_code = err.exit_code();
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Results for every event file in a run, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub events: Vec<EventOutcome>,
}

impl BatchReport {
    pub fn failures(&self) -> usize {
        self.events.iter().filter(|e| !e.is_success()).count()
    }

    pub fn scripts_written(&self) -> usize {
        self.events.iter().map(|e| e.written.len()).sum()
    }

    /// Exit code of the first failed event, or success.
    pub fn exit_code(&self) -> i32 {
        self.events
            .iter()
            .find(|e| !e.is_success())
            .map(|e| e.exit_code)
            .unwrap_or(exit_codes::SUCCESS)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GenError::Precondition(format!("failed to serialize report to JSON: {}", e))
        })
    }

    /// Human-readable summary.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for event in &self.events {
            match &event.event_tag {
                Some(tag) => {
                    let _ = writeln!(out, "event:        {} ({})", event.input.display(), tag);
                }
                None => {
                    let _ = writeln!(out, "event:        {}", event.input.display());
                }
            }
            for script in &event.written {
                let _ = writeln!(out, "  template:    {}", script.template);
                let _ = writeln!(out, "  output_file: {}", script.output.display());
            }
            if let Some(error) = &event.error {
                let _ = writeln!(out, "  error:       {}", error);
            }
            out.push('\n');
        }

        let _ = write!(
            out,
            "Generated {} script(s) for {} event file(s)",
            self.scripts_written(),
            self.events.len()
        );
        if self.failures() > 0 {
            let _ = write!(out, "; {} failed", self.failures());
        }
        out.push('.');

        out
    }
}
