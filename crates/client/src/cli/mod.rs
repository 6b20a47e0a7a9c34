//! CLI command definitions.

pub mod auth;
pub mod prefs;
pub mod request;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the Industrias SP API.
#[derive(Debug, Parser)]
#[command(name = "industrias-client")]
#[command(about = "CLI client for the Industrias SP API", long_about = None)]
pub struct Cli {
    /// Backend base URL.
    #[arg(long, env = "INDUSTRIAS_API_URL", default_value = "http://localhost:3001")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    /// Session-scoped bearer token, used when the credentials file holds none.
    #[arg(long, env = "INDUSTRIAS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Credentials file for persistent tokens and preferences.
    #[arg(
        long,
        env = "INDUSTRIAS_CREDENTIALS",
        default_value = ".industrias/credentials.json"
    )]
    pub credentials: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the stored bearer token.
    Auth(auth::AuthCommand),
    /// Send a JSON request to the API.
    Request(request::RequestCommand),
    /// Upload a multipart form.
    Upload(request::UploadCommand),
    /// Watch admin notifications.
    Watch,
    /// Stored preferences.
    Prefs(prefs::PrefsCommand),
}
