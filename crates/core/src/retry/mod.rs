mod policy;

pub use policy::{RetryPolicy, DEFAULT_BACKOFF_UNIT, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT};
