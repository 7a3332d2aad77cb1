use std::fmt;

use thiserror::Error;

use crate::api::ApiError;
use crate::session::SessionError;

/// Why an auth operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response reached us
    Transport,
    /// The server answered and said no (bad credentials, validation, 5xx)
    Rejected,
    /// The resource does not exist
    NotFound,
    /// A success status with a body we could not use
    InvalidResponse,
    /// Caught on the client before any request was made
    Validation,
    /// The session could not be persisted
    Storage,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::Transport => "transport",
            FailureKind::Rejected => "rejected",
            FailureKind::NotFound => "not found",
            FailureKind::InvalidResponse => "invalid response",
            FailureKind::Validation => "validation",
            FailureKind::Storage => "storage",
        };
        f.write_str(label)
    }
}

/// A failed auth operation with a message fit for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthFailure {
    pub kind: FailureKind,
    pub message: String,
}

pub type AuthOutcome<T> = Result<T, AuthFailure>;

impl AuthFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Validation, message)
    }

    /// Classify an API error. The server's own message wins; otherwise the
    /// caller's fallback is shown.
    pub fn from_api(err: &ApiError, fallback: &str) -> Self {
        let kind = match err {
            ApiError::NetworkError(_) | ApiError::InvalidUrl(_) => FailureKind::Transport,
            ApiError::NotFound { .. } => FailureKind::NotFound,
            ApiError::InvalidResponse(_) => FailureKind::InvalidResponse,
            ApiError::Unauthorized { .. }
            | ApiError::AccessDenied { .. }
            | ApiError::Rejected { .. }
            | ApiError::ServerError { .. } => FailureKind::Rejected,
        };
        let message = err.server_message().unwrap_or(fallback).to_string();
        Self { kind, message }
    }

    pub fn from_session(err: &SessionError) -> Self {
        match err {
            SessionError::EmptyToken => {
                Self::new(FailureKind::InvalidResponse, "Server returned an empty token")
            }
            other => Self::new(FailureKind::Storage, format!("Could not save session: {}", other)),
        }
    }
}
