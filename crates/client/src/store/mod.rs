//! Credential stores backing [`CredentialProvider`].
//!
//! [`CredentialProvider`]: industrias_core::auth::CredentialProvider

mod file;
mod layered;
mod memory;

pub use file::{FileTokenStore, StoredCredentials};
pub use layered::LayeredTokenStore;
pub use memory::MemoryTokenStore;
