//! Persistent token storage in a JSON document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use industrias_core::auth::{CredentialError, CredentialProvider, Persistence, Result};

/// On-disk layout, keyed like the browser storage it replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "darkMode", default)]
    pub dark_mode: bool,
}

/// Token store persisted to a JSON file.
///
/// Tokens are always written to disk, whatever [`Persistence`] they are
/// stored with. Writes are serialized through an internal lock. A corrupt
/// document reads as empty and is replaced by the next write.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document; a missing file reads as empty.
    pub async fn load(&self) -> Result<StoredCredentials> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => {
                Ok(StoredCredentials::default())
            }
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(StoredCredentials::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like [`load`](Self::load), but a corrupt document reads as empty.
    async fn load_or_default(&self) -> Result<StoredCredentials> {
        match self.load().await {
            Err(CredentialError::Corrupt(e)) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring corrupt credentials file");
                Ok(StoredCredentials::default())
            }
            other => other,
        }
    }

    async fn save(&self, credentials: &StoredCredentials) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(credentials)?;
        tokio::fs::write(&self.path, bytes).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .await?;
        }

        debug!(path = %self.path.display(), "Credentials saved");
        Ok(())
    }

    async fn update(&self, f: impl FnOnce(&mut StoredCredentials)) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut credentials = self.load_or_default().await?;
        f(&mut credentials);
        self.save(&credentials).await
    }

    /// Stored dark mode preference.
    pub async fn dark_mode(&self) -> Result<bool> {
        Ok(self.load_or_default().await?.dark_mode)
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.update(|c| c.dark_mode = enabled).await
    }
}

#[async_trait]
impl CredentialProvider for FileTokenStore {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.load_or_default().await?.token)
    }

    async fn store_token(&self, token: &str, _persistence: Persistence) -> Result<()> {
        let token = token.to_string();
        self.update(|c| c.token = Some(token)).await
    }

    async fn clear(&self) -> Result<()> {
        self.update(|c| c.token = None).await
    }
}
