//! Session guard: token checks before protected calls and teardown on 401.

mod redirect;

use std::future::Future;
use std::sync::Arc;

use industrias_core::auth::{is_login_route, login_redirect, CredentialProvider};
use tracing::{info, warn};

use crate::error::{ClientError, Result};

pub use redirect::{CliRedirect, RecordingRedirect, RedirectHandler};

/// Gates protected calls on the presence of a bearer token.
#[derive(Clone)]
pub struct SessionGuard {
    credentials: Arc<dyn CredentialProvider>,
    redirect: Arc<dyn RedirectHandler>,
    login_path: String,
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("login_path", &self.login_path)
            .finish_non_exhaustive()
    }
}

impl SessionGuard {
    pub fn new(
        credentials: Arc<dyn CredentialProvider>,
        redirect: Arc<dyn RedirectHandler>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            redirect,
            login_path: login_path.into(),
        }
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialProvider> {
        &self.credentials
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    fn on_login_route(&self, current: Option<&str>) -> bool {
        current.is_some_and(|path| is_login_route(path, &self.login_path))
    }

    /// Return the stored token, or redirect to the login route carrying the
    /// current path and fail without dispatching anything.
    pub async fn require_token(&self) -> Result<String> {
        if let Some(token) = self.credentials.token().await?.filter(|t| !t.is_empty()) {
            return Ok(token);
        }

        let current = self.redirect.current_path();
        let location = login_redirect(&self.login_path, current.as_deref());
        if !self.on_login_route(current.as_deref()) {
            info!(location = %location, "No credentials, redirecting to login");
            self.redirect.redirect(&location);
        }

        Err(ClientError::Unauthenticated { redirect: location })
    }

    /// Run `f` with the token only when one is stored.
    pub async fn protect<F, Fut, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let token = self.require_token().await?;
        f(token).await
    }

    /// Forget stored credentials and send the user to the login route,
    /// unless they are already there.
    pub async fn expire_session(&self) -> Result<()> {
        let cleared = self.credentials.clear().await;

        let current = self.redirect.current_path();
        if !self.on_login_route(current.as_deref()) {
            warn!(login_path = %self.login_path, "Session expired, redirecting to login");
            self.redirect.redirect(&self.login_path);
        }

        cleared.map_err(ClientError::from)
    }
}
