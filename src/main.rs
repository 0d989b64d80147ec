//! Shadewalk CLI binary entry point.

use clap::Parser;
use shadewalk::cli::{commands, Cli};
use shadewalk::error::ApiError;
use shadewalk::{ClientConfig, ShadewalkClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SHADEWALK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: shadewalk::error::Result<()> = async {
        let config = ClientConfig::from_env()?;
        let client = ShadewalkClient::from_config(&config)?;
        commands::run(&client, cli.command, cli.json).await
    }
    .await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if matches!(e, ApiError::Unauthenticated(_)) {
            eprintln!("Run `shadewalk auth login` to sign in again.");
        }
        std::process::exit(1);
    }
}
