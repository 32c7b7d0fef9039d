use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP-style code carried by every validation failure.
pub const BAD_REQUEST: u16 = 400;
pub const NOT_FOUND: u16 = 404;
pub const INTERNAL_ERROR: u16 = 500;

/// A structured failure reported as `{"message": ..., "code": ...}`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub code: u16,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, BAD_REQUEST)
    }
}

#[derive(Error, Debug)]
pub enum IntegratorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unknown service: {service_id}")]
    UnknownService { service_id: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl IntegratorError {
    /// HTTP-style status for external reporting.
    pub fn code(&self) -> u16 {
        match self {
            IntegratorError::Invalid(e) => e.code,
            IntegratorError::UnknownService { .. } => NOT_FOUND,
            IntegratorError::IoError(_) => INTERNAL_ERROR,
            IntegratorError::JsonError(_)
            | IntegratorError::TomlError(_)
            | IntegratorError::UrlError(_)
            | IntegratorError::ConfigError { .. } => BAD_REQUEST,
        }
    }

    /// True for failures of the definitions themselves, as opposed to failures
    /// reading or parsing them.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            IntegratorError::Invalid(_) | IntegratorError::UnknownService { .. }
        )
    }

    /// Process exit status: 1 for rejected definitions, 2 for unreadable ones.
    pub fn exit_code(&self) -> i32 {
        if self.is_rejection() {
            1
        } else {
            2
        }
    }

    pub fn report(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.to_string(),
            "code": self.code(),
        })
    }
}

pub type Result<T> = std::result::Result<T, IntegratorError>;
