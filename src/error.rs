//! Crate-wide error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Wrong size of wheel for {car_type}: {size}")]
    InvalidWheelSize { car_type: String, size: u32 },

    #[error("Unknown city: '{0}'")]
    UnknownCity(String),

    #[error("Invalid data at line {line}: {message}")]
    InvalidData { line: usize, message: String },

    #[error("Trigger '{trigger}' is not permitted in state '{state}'")]
    TransitionNotPermitted { state: String, trigger: String },

    #[error("Operation not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("No handler registered for request type {0}")]
    NoHandler(&'static str),

    #[error("Unknown demo: '{0}'")]
    UnknownDemo(String),

    #[error("Unknown category: '{0}' (expected creational, structural, behavioral or solid)")]
    UnknownCategory(String),
}

impl PatternError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub fn invalid_data(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidData {
            line,
            message: message.into(),
        }
    }
}

/// Rejects empty or whitespace-only names.
pub(crate) fn require_non_blank(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PatternError::invalid_argument(name, "must not be empty"));
    }
    Ok(())
}

pub type Result<T> = std::result::Result<T, PatternError>;
