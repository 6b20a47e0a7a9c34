use thiserror::Error;

/// Failures reading or writing stored credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("credential file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("credential storage error: {0}")]
    Storage(String),
}
