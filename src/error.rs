use serde::Serialize;
use std::fmt;

/// Failure categories the app distinguishes. Every error carries the
/// user-facing message that ends up in the page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Validation,
    Transport,
    Protocol,
    PayloadShape,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        AppError {
            kind: ErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn protocol(status: u16) -> Self {
        AppError {
            kind: ErrorKind::Protocol,
            message: format!("Server error: {}", status),
        }
    }

    pub fn payload_shape() -> Self {
        AppError {
            kind: ErrorKind::PayloadShape,
            message: "Unexpected response format from API.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::transport(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::validation(err.to_string())
    }
}
