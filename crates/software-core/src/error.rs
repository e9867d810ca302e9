//! Error types for the software registry.
//!
//! Catalog problems of any kind surface as [`SoftwareError::Config`] naming the
//! offending file; path derivation on an item that lacks an optional field
//! surfaces as [`SoftwareError::MissingField`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the software registry.
#[derive(Debug, Error)]
pub enum SoftwareError {
    // Catalog errors
    #[error("Software catalog {} is invalid: {reason}", path.display())]
    Config {
        path: PathBuf,
        /// Underlying read or parse failure, kept for diagnostics.
        reason: String,
    },

    // Item errors
    #[error("{item_name}: {field} is not configured")]
    MissingField { item_name: String, field: &'static str },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, SoftwareError>;

impl From<std::io::Error> for SoftwareError {
    fn from(err: std::io::Error) -> Self {
        SoftwareError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl SoftwareError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SoftwareError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create a catalog error for `path`.
    pub fn config(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        SoftwareError::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error came from a catalog file.
    pub fn is_config_error(&self) -> bool {
        matches!(self, SoftwareError::Config { .. })
    }

    /// The catalog file this error names, if any.
    pub fn config_path(&self) -> Option<&std::path::Path> {
        match self {
            SoftwareError::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}
