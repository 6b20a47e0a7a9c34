//! industrias_client - Resilient API client for the Industrias SP backend.
//!
//! One configurable client shared by every front end: bearer token from an
//! injected [`CredentialProvider`], per-attempt timeout, bounded linear
//! retry, and session teardown on 401 through an injected
//! [`RedirectHandler`].
//!
//! [`CredentialProvider`]: industrias_core::auth::CredentialProvider

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod notifications;
pub mod output;
pub mod session;
pub mod store;

pub use client::{ApiClient, RequestOptions};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use notifications::AdminChannel;
pub use session::{CliRedirect, RecordingRedirect, RedirectHandler, SessionGuard};
pub use store::{FileTokenStore, LayeredTokenStore, MemoryTokenStore};
