//! Failure classification and composed error messages.

mod format;
mod kind;

pub use format::{format_http_error, truncate_body, MAX_ERROR_BODY_CHARS};
pub use kind::{classify_status, ErrorKind};
