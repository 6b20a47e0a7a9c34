//! Session-scoped token storage.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use industrias_core::auth::{CredentialProvider, Persistence, Result};

/// In-memory token store.
///
/// Holds the token for the lifetime of the process only, whatever
/// [`Persistence`] it is stored with.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

#[async_trait]
impl CredentialProvider for MemoryTokenStore {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn store_token(&self, token: &str, _persistence: Persistence) -> Result<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.token.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_and_clear() {
        let store = MemoryTokenStore::new();

        store.store_token("tok-1", Persistence::Session).await.unwrap();
        assert_eq!(store.token().await.unwrap(), Some("tok-1".to_string()));

        store.clear().await.unwrap();
        assert_eq!(store.token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryTokenStore::with_token("shared");
        let clone = store.clone();

        clone.clear().await.unwrap();
        assert_eq!(store.token().await.unwrap(), None);
    }
}
