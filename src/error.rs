use thiserror::Error;

/// Custom error types for ambient
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmbientError {
    #[error("Cannot read config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AmbientError {
    fn from(err: std::io::Error) -> Self {
        AmbientError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
