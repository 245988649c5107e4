//! Custom error types for KKMCTL

use std::fmt;

/// Main error type for KKMCTL operations
#[derive(Debug)]
pub enum KkmCtlError {
    /// Configuration related errors (bad URL, non-numeric form field, etc.)
    Config(String),
    /// Backend service communication errors
    Backend(String),
    /// Command dispatch errors
    Command(String),
    /// Durable store errors
    Storage(String),
    /// General I/O errors
    Io(std::io::Error),
    /// Serialization errors
    Serialization(String),
}

impl fmt::Display for KkmCtlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KkmCtlError::Config(msg) => write!(f, "Configuration error: {}", msg),
            KkmCtlError::Backend(msg) => write!(f, "Backend error: {}", msg),
            KkmCtlError::Command(msg) => write!(f, "Command error: {}", msg),
            KkmCtlError::Storage(msg) => write!(f, "Storage error: {}", msg),
            KkmCtlError::Io(err) => write!(f, "I/O error: {}", err),
            KkmCtlError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for KkmCtlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KkmCtlError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KkmCtlError {
    fn from(err: std::io::Error) -> Self {
        KkmCtlError::Io(err)
    }
}

impl From<serde_json::Error> for KkmCtlError {
    fn from(err: serde_json::Error) -> Self {
        KkmCtlError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for KkmCtlError {
    fn from(err: reqwest::Error) -> Self {
        KkmCtlError::Backend(err.to_string())
    }
}

/// Result type alias for KKMCTL operations
pub type Result<T> = std::result::Result<T, KkmCtlError>;
