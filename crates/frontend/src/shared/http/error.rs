use thiserror::Error;

use crate::system::auth::storage::StorageError;

/// HTTP status the server uses for a missing or rejected token
pub const UNAUTHORIZED: u16 = 401;

/// Failure of an API call.
///
/// Network failures carry no status; application failures carry the status
/// and the raw response body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Request failed: {status}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }
}
