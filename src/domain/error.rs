use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Coarse classification of [`AppError`] for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown platform or unreadable template directory.
    InvalidTemplate,
    /// Copy, read, or write failure inside the pipeline.
    FileSystem,
    /// Non-zero exit or spawn failure of an external tool.
    Subprocess,
    /// Bad input rejected by the front end before the pipeline starts.
    InvalidInput,
}

/// Library-wide error type for create-kadena-app operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Platform is unsupported or its template directory cannot be read.
    #[error("Invalid template for platform '{platform}': {reason}")]
    InvalidTemplate { platform: String, reason: String },

    /// Underlying I/O failure, with the path that triggered it.
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Underlying I/O failure without path context.
    #[error(transparent)]
    RawIo(#[from] io::Error),

    /// External command failed to start or exited non-zero.
    #[error("Command '{command}' failed: {details}")]
    Subprocess { command: String, details: String },

    /// User input is invalid.
    #[error("{0}")]
    Validation(String),

    /// Defaults file or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn io(action: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        AppError::Io { action, path: path.as_ref().to_path_buf(), source }
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidTemplate { .. } => ErrorKind::InvalidTemplate,
            AppError::Io { .. } | AppError::RawIo(_) => ErrorKind::FileSystem,
            AppError::Subprocess { .. } => ErrorKind::Subprocess,
            AppError::Validation(_) | AppError::Configuration(_) | AppError::TomlParse(_) => {
                ErrorKind::InvalidInput
            }
        }
    }
}
