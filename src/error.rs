//! Unified application error model and mapping helpers.
//! Frontends (file serving, wiki serving, the CLI) map resolver failures through
//! this type so that every "not found" and "denied" looks the same from outside.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::resource::ResolutionError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppError {
    UserInput { code: String, message: String },
    Forbidden { code: String, message: String },
    Internal { code: String, message: String },
}

impl AppError {
    pub fn code_str(&self) -> &str {
        match self {
            AppError::UserInput { code, .. }
            | AppError::Forbidden { code, .. }
            | AppError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::UserInput { message, .. }
            | AppError::Forbidden { message, .. }
            | AppError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn user<S: Into<String>>(code: S, msg: S) -> Self { AppError::UserInput { code: code.into(), message: msg.into() } }
    pub fn forbidden<S: Into<String>>(code: S, msg: S) -> Self { AppError::Forbidden { code: code.into(), message: msg.into() } }

    /// Map to HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            AppError::UserInput { .. } => 400,
            AppError::Forbidden { .. } => 403,
            AppError::Internal { .. } => 500,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<ResolutionError> for AppError {
    fn from(err: ResolutionError) -> Self {
        if err.is_not_found_or_denied() {
            // One answer for missing and denied alike; the detail stays in the logs
            AppError::forbidden("access_denied", "access to this resource is denied")
        } else {
            AppError::user("malformed_identifier".to_string(), err.to_string())
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal { code: "internal_error".into(), message: format!("{err:#}") }
    }
}
