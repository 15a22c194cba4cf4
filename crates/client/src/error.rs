//! Client-layer error model.

use thiserror::Error;

use rentroll_ai::AiError;
use rentroll_dashboard::StoreError;

/// Failure talking to the backend API.
///
/// Backend errors pass through with their status and `detail` message; the
/// two statuses callers branch on (401/404) get their own variants.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response decode error: {0}")]
    Decode(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Map a non-success status plus the backend's `detail` message.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Api { status, message },
        }
    }
}

impl From<ApiError> for StoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => StoreError::Unauthorized,
            ApiError::NotFound => StoreError::NotFound,
            other => StoreError::Backend(other.to_string()),
        }
    }
}

impl From<ApiError> for AiError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(e) => AiError::Transport(e.to_string()),
            other => AiError::Backend(other.to_string()),
        }
    }
}
