//! Error types for the mtgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages
//! naming the offending field or path.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mtgen operations.
#[derive(Error, Debug)]
pub enum GenError {
    /// The event document could not be parsed into a YAML mapping.
    #[error("badly formatted YAML file: {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    /// A required event field is absent, either at load time or when a
    /// substitution rule needs it.
    #[error("missing from event file: {field}")]
    MissingField { field: &'static str },

    /// A template could not be retrieved.
    #[error("failed to fetch template '{location}': {reason}")]
    Fetch { location: String, reason: String },

    /// A referenced path does not exist or is the wrong kind of file.
    #[error("{0}")]
    Precondition(String),

    /// Writing generated output failed.
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::MalformedInput { .. } => exit_codes::INPUT_ERROR,
            GenError::MissingField { .. } => exit_codes::INPUT_ERROR,
            GenError::Fetch { .. } => exit_codes::FETCH_FAILURE,
            GenError::Precondition(_) => exit_codes::USER_ERROR,
            GenError::Io { .. } => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for mtgen operations.
pub type Result<T> = std::result::Result<T, GenError>;
