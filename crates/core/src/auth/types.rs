use serde::{Deserialize, Serialize};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key of the dark mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Cookie mirroring the bearer token for server-rendered route checks.
pub const AUTH_COOKIE: &str = "auth_token";

/// Query parameter carrying the path to return to after login.
pub const RETURN_TO_PARAM: &str = "return_to";

/// Default login route.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Lifetime of a stored token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persistence {
    /// Survives restarts ("remember me").
    #[default]
    Persistent,
    /// Lives as long as the current session.
    Session,
}

/// Route protection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    pub login_path: String,
    /// Route prefixes that need an authenticated session.
    pub protected_prefixes: Vec<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            protected_prefixes: vec![
                "/admin".to_string(),
                "/account".to_string(),
                "/checkout".to_string(),
            ],
        }
    }
}

/// Outcome of a route check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}
