//! Auth CLI commands.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use industrias_core::auth::Persistence;

use crate::store::{FileTokenStore, LayeredTokenStore, MemoryTokenStore};

/// Token management commands.
#[derive(Debug, Parser)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Available auth actions.
#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Store a bearer token.
    Login {
        /// Bearer token issued by the backend.
        token: String,
        /// Keep the token for this session only instead of the credentials file.
        #[arg(long)]
        session: bool,
    },
    /// Forget the stored token.
    Logout,
    /// Show whether a token is stored.
    Status,
}

/// Persistence selected by `auth login`.
pub fn login_persistence(session: bool) -> Persistence {
    if session {
        Persistence::Session
    } else {
        Persistence::Persistent
    }
}

/// Credentials file first, then the session token given on the command line.
pub fn credential_store(file: FileTokenStore, session_token: Option<String>) -> LayeredTokenStore {
    let session = match session_token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    LayeredTokenStore::new(Arc::new(file), Arc::new(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use industrias_core::auth::CredentialProvider;
    use tempfile::TempDir;

    fn file_store(dir: &TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join("credentials.json"))
    }

    #[test]
    fn test_login_session_flag() {
        let cli = AuthCommand::try_parse_from(["auth", "login", "tok", "--session"]).unwrap();
        match cli.action {
            AuthAction::Login { token, session } => {
                assert_eq!(token, "tok");
                assert_eq!(login_persistence(session), Persistence::Session);
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert_eq!(login_persistence(false), Persistence::Persistent);
    }

    #[tokio::test]
    async fn test_session_login_stays_off_disk() {
        let dir = TempDir::new().unwrap();
        let file = file_store(&dir);
        file.store_token("old", Persistence::Persistent).await.unwrap();
        let store = credential_store(file.clone(), None);

        store.store_token("short", login_persistence(true)).await.unwrap();

        assert_eq!(store.token().await.unwrap(), Some("short".to_string()));
        assert_eq!(file.token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_persistent_login_writes_file() {
        let dir = TempDir::new().unwrap();
        let file = file_store(&dir);
        let store = credential_store(file.clone(), Some("from-env".to_string()));

        store.store_token("long", login_persistence(false)).await.unwrap();

        assert_eq!(file.token().await.unwrap(), Some("long".to_string()));
        assert_eq!(store.token().await.unwrap(), Some("long".to_string()));
    }

    #[tokio::test]
    async fn test_session_token_used_without_stored_token() {
        let dir = TempDir::new().unwrap();
        let store = credential_store(file_store(&dir), Some("from-env".to_string()));

        assert_eq!(store.token().await.unwrap(), Some("from-env".to_string()));

        store.clear().await.unwrap();
        assert_eq!(store.token().await.unwrap(), None);
    }
}
