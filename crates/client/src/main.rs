//! industrias-client CLI entry point.

use std::sync::Arc;

use clap::Parser;
use industrias_client::cli::auth::{credential_store, login_persistence, AuthAction};
use industrias_client::cli::prefs::PrefsAction;
use industrias_client::cli::{Cli, Commands, OutputFormat};
use industrias_client::output::{format_output, pretty};
use industrias_client::{ApiClient, ClientConfig, CliRedirect, FileTokenStore};
use industrias_core::auth::{CredentialProvider, Persistence};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "industrias_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let file_store = FileTokenStore::new(&cli.credentials);
    let credentials: Arc<dyn CredentialProvider> =
        Arc::new(credential_store(file_store.clone(), cli.token.clone()));

    let config = ClientConfig::from_env().with_base_url(cli.base_url.clone());
    let client = ApiClient::new(&config, credentials.clone(), Arc::new(CliRedirect))?;

    match cli.command {
        Commands::Auth(auth_cmd) => match auth_cmd.action {
            AuthAction::Login { token, session } => {
                let persistence = login_persistence(session);
                credentials.store_token(&token, persistence).await?;
                if !cli.quiet {
                    match persistence {
                        Persistence::Persistent => {
                            println!("Token saved to {}", file_store.path().display())
                        }
                        Persistence::Session => println!(
                            "Session token accepted; set INDUSTRIAS_TOKEN to reuse it in later commands"
                        ),
                    }
                }
            }
            AuthAction::Logout => {
                credentials.clear().await?;
                if !cli.quiet {
                    println!("Logged out");
                }
            }
            AuthAction::Status => {
                let token = credentials.token().await?;
                match cli.format {
                    OutputFormat::Json => println!(
                        "{}",
                        format_output(
                            &serde_json::json!({ "authenticated": token.is_some() }),
                            cli.format
                        )
                    ),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_auth_status(token.as_deref()))
                    }
                }
            }
        },
        Commands::Request(request_cmd) => {
            let options = request_cmd.options()?;
            let value: serde_json::Value = client.request(&request_cmd.path, options).await?;
            println!("{}", format_output(&value, cli.format));
        }
        Commands::Upload(upload_cmd) => {
            let form = upload_cmd.form().await?;
            let value: serde_json::Value = client.upload(&upload_cmd.path, form).await?;
            println!("{}", format_output(&value, cli.format));
        }
        Commands::Watch => {
            use tokio_stream::StreamExt;

            if !cli.quiet {
                println!("Watching admin notifications...");
            }
            let stream = client.admin_notifications().await?;
            tokio::pin!(stream);
            while let Some(result) = stream.next().await {
                match result {
                    Ok(notification) => match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&notification, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_notification(&notification))
                        }
                    },
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        break;
                    }
                }
            }
        }
        Commands::Prefs(prefs_cmd) => match prefs_cmd.action {
            PrefsAction::DarkMode { value: Some(value) } => {
                let enabled = bool::from(value);
                file_store.set_dark_mode(enabled).await?;
                if !cli.quiet {
                    println!("Dark mode {}", if enabled { "on" } else { "off" });
                }
            }
            PrefsAction::DarkMode { value: None } => {
                let enabled = file_store.dark_mode().await?;
                println!("{}", if enabled { "on" } else { "off" });
            }
        },
    }

    Ok(())
}
