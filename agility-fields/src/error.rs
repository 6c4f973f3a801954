//! Error types for field definition and model building

use std::fmt;
use thiserror::Error;

/// Result type for field operations
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors that can occur when parsing, validating or building fields
#[derive(Debug, Error)]
pub enum FieldError {
    /// Input failed one or more schema constraints
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The `type` tag is outside the known field kind union. This is a
    /// contract violation: validated input never reaches this path.
    #[error("unrecognized field kind: {kind}")]
    UnrecognizedKind { kind: String },
}

/// A single violated constraint, located by its path into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Path into the offending input, e.g. `fields[2].choices`
    pub path: String,
    /// The violated constraint, e.g. `array must contain at least 1 element`
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Validation failure carrying every violated constraint found in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl ValidationError {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Shorthand for a failure with a single issue.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::new(path, message)],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for issue in &self.issues {
            write!(f, "; {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
