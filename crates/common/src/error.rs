//! Error types shared across OpenTrace crates.

use std::path::PathBuf;

/// Top-level error type for OpenTrace operations.
#[derive(Debug, thiserror::Error)]
pub enum OpentraceError {
    #[error("Trajectory error: {message}")]
    Trajectory { message: String },

    #[error("Session error: {message}")]
    Session { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using OpentraceError.
pub type OpentraceResult<T> = Result<T, OpentraceError>;

impl OpentraceError {
    pub fn trajectory(msg: impl Into<String>) -> Self {
        Self::Trajectory {
            message: msg.into(),
        }
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
