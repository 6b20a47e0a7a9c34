//! industrias_core - Functional core for the Industrias SP API client.
//!
//! Everything in this crate is pure: request shaping, retry arithmetic,
//! failure classification, session-guard routing and notification payloads.
//! Network and storage I/O live in `industrias_client`.

pub mod auth;
pub mod error;
pub mod notifications;
pub mod request;
pub mod retry;
