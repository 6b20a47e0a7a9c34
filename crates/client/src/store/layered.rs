//! Persistent-then-session token lookup.

use std::sync::Arc;

use async_trait::async_trait;

use industrias_core::auth::{CredentialProvider, Persistence, Result};

/// Combines a persistent store and a session-scoped store.
///
/// Reads prefer the persistent store. Storing a token writes it to the store
/// matching its [`Persistence`] and clears the other one, so a single token
/// is live at a time.
#[derive(Clone)]
pub struct LayeredTokenStore {
    persistent: Arc<dyn CredentialProvider>,
    session: Arc<dyn CredentialProvider>,
}

impl std::fmt::Debug for LayeredTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredTokenStore").finish_non_exhaustive()
    }
}

impl LayeredTokenStore {
    pub fn new(
        persistent: Arc<dyn CredentialProvider>,
        session: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            persistent,
            session,
        }
    }
}

#[async_trait]
impl CredentialProvider for LayeredTokenStore {
    async fn token(&self) -> Result<Option<String>> {
        match self.persistent.token().await? {
            Some(token) => Ok(Some(token)),
            None => self.session.token().await,
        }
    }

    async fn store_token(&self, token: &str, persistence: Persistence) -> Result<()> {
        match persistence {
            Persistence::Persistent => {
                self.persistent.store_token(token, persistence).await?;
                self.session.clear().await
            }
            Persistence::Session => {
                self.session.store_token(token, persistence).await?;
                self.persistent.clear().await
            }
        }
    }

    async fn clear(&self) -> Result<()> {
        self.persistent.clear().await?;
        self.session.clear().await
    }
}
