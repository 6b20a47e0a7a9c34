//! Preference CLI commands.

use clap::{Parser, Subcommand, ValueEnum};

/// Preference commands.
#[derive(Debug, Parser)]
pub struct PrefsCommand {
    #[command(subcommand)]
    pub action: PrefsAction,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        matches!(toggle, Toggle::On)
    }
}

/// Available preference actions.
#[derive(Debug, Subcommand)]
pub enum PrefsAction {
    /// Show or set the dark mode preference.
    DarkMode {
        /// New value; omit to show the current one.
        value: Option<Toggle>,
    },
}
