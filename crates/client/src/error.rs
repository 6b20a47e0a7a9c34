//! Client error types.

use industrias_core::auth::CredentialError;
use industrias_core::error::ErrorKind;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure after the retry budget was spent.
    #[error("Network error calling {url}: {message}")]
    Network { url: String, message: String },

    /// 5xx response after the retry budget was spent.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// 4xx response other than 401.
    #[error("{message}")]
    Client { status: u16, message: String },

    #[error("Session expired, please log in again")]
    SessionExpired,

    #[error("Not authenticated, login required at {redirect}")]
    Unauthenticated { redirect: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(String),

    #[error("Credential error: {0}")]
    Credentials(#[from] CredentialError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Failure category, for errors produced by an HTTP exchange.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ClientError::Network { .. } => Some(ErrorKind::Network),
            ClientError::Server { .. } => Some(ErrorKind::Server),
            ClientError::Client { .. } => Some(ErrorKind::Client),
            ClientError::SessionExpired => Some(ErrorKind::Auth),
            _ => None,
        }
    }

    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } | ClientError::Client { status, .. } => {
                Some(*status)
            }
            ClientError::SessionExpired => Some(401),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_some_and(|kind| kind.is_retryable())
    }
}
