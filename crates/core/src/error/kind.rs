use serde::{Deserialize, Serialize};

/// Failure categories surfaced by the API client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Transport-level failure: timeout, refused connection, DNS, reset.
    Network,
    /// 5xx response.
    Server,
    /// 4xx response other than 401.
    Client,
    /// 401 response; tears the session down.
    Auth,
}

impl ErrorKind {
    /// Whether a failure of this kind may be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Network | ErrorKind::Server)
    }
}

/// Classify an HTTP status code.
///
/// Returns `None` for 2xx responses.
///
/// # Examples
///
/// ```
/// use industrias_core::error::{classify_status, ErrorKind};
///
/// assert_eq!(classify_status(200), None);
/// assert_eq!(classify_status(401), Some(ErrorKind::Auth));
/// assert_eq!(classify_status(404), Some(ErrorKind::Client));
/// assert_eq!(classify_status(503), Some(ErrorKind::Server));
/// ```
pub fn classify_status(status: u16) -> Option<ErrorKind> {
    match status {
        200..=299 => None,
        401 => Some(ErrorKind::Auth),
        500..=u16::MAX => Some(ErrorKind::Server),
        _ => Some(ErrorKind::Client),
    }
}
