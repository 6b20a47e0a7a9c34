use std::sync::Mutex;

use tracing::warn;

/// Navigation seam used when a session must be (re)established.
pub trait RedirectHandler: Send + Sync {
    /// Path the user is currently on, if the front end has one.
    fn current_path(&self) -> Option<String> {
        None
    }

    /// Send the user to `location`.
    fn redirect(&self, location: &str);
}

/// Redirect handler for terminal use: there is no page to navigate, so the
/// user is told how to log in again.
#[derive(Debug, Clone, Default)]
pub struct CliRedirect;

impl RedirectHandler for CliRedirect {
    fn redirect(&self, location: &str) {
        warn!(
            location,
            "Login required; run `industrias-client auth login <token>`"
        );
    }
}

/// Redirect handler that records every location it is sent to.
#[derive(Debug, Default)]
pub struct RecordingRedirect {
    current: Mutex<Option<String>>,
    locations: Mutex<Vec<String>>,
}

impl RecordingRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on the given path.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            current: Mutex::new(Some(path.into())),
            locations: Mutex::new(Vec::new()),
        }
    }

    /// Locations redirected to, oldest first.
    pub fn locations(&self) -> Vec<String> {
        self.locations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl RedirectHandler for RecordingRedirect {
    fn current_path(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn redirect(&self, location: &str) {
        self.locations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(location.to_string());
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(location.to_string());
    }
}
