//! Error types for the generator

use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Generator errors
#[derive(Error, Debug)]
pub enum GenError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid variant specification `{entry}`: {reason}")]
    Format { entry: String, reason: String },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("TOML error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl GenError {
    pub(crate) fn format(entry: &str, reason: impl Into<String>) -> Self {
        GenError::Format {
            entry: entry.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::Usage(_) => crate::EXIT_USAGE,
            _ => 1,
        }
    }
}
