//! Credentials, the `auth_token` cookie mirror and session-guard routing.

mod error;
mod functions;
mod traits;
mod types;
mod validation;

pub use error::CredentialError;
pub use functions::{
    auth_cookie, clear_auth_cookie, evaluate_route, is_login_route, login_redirect,
    token_from_cookie_header,
};
pub use traits::{CredentialProvider, Result};
pub use types::{
    GuardConfig, GuardDecision, Persistence, AUTH_COOKIE, DARK_MODE_KEY, DEFAULT_LOGIN_PATH,
    RETURN_TO_PARAM, TOKEN_KEY,
};
pub use validation::validate_return_to;
