use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {body}")]
    Unauthorized { body: String, message: Option<String> },

    #[error("Access denied: {body}")]
    AccessDenied { body: String, message: Option<String> },

    #[error("Resource not found: {body}")]
    NotFound { body: String, message: Option<String> },

    #[error("Request rejected (status {status}): {body}")]
    Rejected {
        status: u16,
        body: String,
        message: Option<String>,
    },

    #[error("Server error: {body}")]
    ServerError { body: String, message: Option<String> },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Error body shape used by the server: `{"message": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    /// Pull `message` out of the full body, before it is truncated
    fn extract_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = Self::extract_message(body);
        let body = Self::truncate_body(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized { body, message },
            403 => ApiError::AccessDenied { body, message },
            404 => ApiError::NotFound { body, message },
            500..=599 => ApiError::ServerError { body, message },
            code => ApiError::Rejected {
                status: code,
                body,
                message,
            },
        }
    }

    /// The `message` the server put in its error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message, .. }
            | ApiError::AccessDenied { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::ServerError { message, .. }
            | ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// No response was received at all
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::NetworkError(_) | ApiError::InvalidUrl(_))
    }
}
