//! Error types for management API operations

use agility_containers::ContainerError;
use agility_fields::FieldError;
use thiserror::Error;

/// Result type for management operations
pub type Result<T> = std::result::Result<T, ManagementError>;

/// Errors that can occur talking to the management API
#[derive(Debug, Error)]
pub enum ManagementError {
    /// Field or model input failed validation or named an unknown kind
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Container conversion or validation failed
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// Transport-level failure (connection, timeout, body decode)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("management API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Client options could not be assembled
    #[error("configuration error: {0}")]
    Config(String),
}
