//! Client Errors
//!
//! Everything that can go wrong between a user gesture and a rendered list.

use std::fmt;

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Request never produced a response (network down, CORS, aborted)
    Transport(String),
    /// Backend answered with a non-success status
    Status(u16),
    /// Response body was not the expected JSON
    Decode(String),
    /// User input rejected before any request was made
    InvalidInput(String),
}

impl ClientError {
    /// Whether this error should be shown to the user rather than only logged
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ClientError::InvalidInput(_))
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ClientError::Status(code) => write!(f, "Server responded with HTTP {}", code),
            ClientError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ClientError::InvalidInput(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ClientError::Status(status.as_u16()),
            None => ClientError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
