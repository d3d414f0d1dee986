//! # Validation Error Types
//!
//! Failures that stop a validation run before any report exists. Findings
//! about the version tree itself are not errors in this sense: they are
//! collected into a [`ValidationReport`](crate::ValidationReport).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a validation run.
#[derive(Error, Debug)]
pub enum ValidateError {
    /// The configuration document does not exist.
    #[error("{} not found", .0.display())]
    ConfigNotFound(PathBuf),

    /// The configuration document is not valid JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but its top-level shape is unusable.
    #[error("failed to parse {}: {reason}", .path.display())]
    InvalidShape { path: PathBuf, reason: String },

    /// Reading the configuration document failed for another reason.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ValidateError {
    /// Whether the configuration document could be read but not understood.
    pub fn is_malformed_config(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::InvalidShape { .. })
    }
}

/// Result alias for validation runs.
pub type ValidateResult<T> = Result<T, ValidateError>;
