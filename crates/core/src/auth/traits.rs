use async_trait::async_trait;

use super::{CredentialError, Persistence};

/// Result type for credential operations.
pub type Result<T> = std::result::Result<T, CredentialError>;

/// Source of the bearer token attached to API requests.
///
/// Reads are independent per call; implementations only need interior
/// mutability for `store_token` and `clear`.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Current bearer token, if any.
    async fn token(&self) -> Result<Option<String>>;

    /// Store a token with the requested lifetime.
    async fn store_token(&self, token: &str, persistence: Persistence) -> Result<()>;

    /// Forget every stored credential.
    async fn clear(&self) -> Result<()>;
}
