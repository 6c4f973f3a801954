//! Error types for container conversion

use thiserror::Error;

/// Result type for container operations
pub type Result<T> = std::result::Result<T, ContainerError>;

/// Errors that can occur converting or validating containers
#[derive(Debug, Error)]
pub enum ContainerError {
    /// A converted container violates the domain schema
    #[error("container validation failed at {path}: {message}")]
    Validation { path: String, message: String },
}

impl ContainerError {
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        ContainerError::Validation {
            path: path.into(),
            message: message.into(),
        }
    }
}
