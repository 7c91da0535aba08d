mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meatline_api::{AccessToken, ApiClient, NoAuth, StaticTokenProvider, TokenProvider};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let global = cli.global;

    match cli.command {
        // Config commands don't need a backend connection
        Command::Config(args) => commands::config_cmd::handle(&args, &global),

        Command::Customers(args) => {
            let client = build_client(&global)?;
            commands::customers::handle(&client, args, &global).await
        }
        Command::Orders(args) => {
            let client = build_client(&global)?;
            commands::orders::handle(&client, args, &global).await
        }
        Command::Checks(args) => {
            let client = build_client(&global)?;
            commands::checks::handle(&client, args, &global).await
        }
        Command::Reminders(args) => {
            let client = build_client(&global)?;
            commands::reminders::handle(&client, args, &global).await
        }
        Command::Stats(args) => {
            let client = build_client(&global)?;
            commands::stats::handle(&client, args, &global).await
        }
        Command::Files(args) => {
            let client = build_client(&global)?;
            commands::files::handle(&client, args, &global).await
        }
    }
}

/// Build an `ApiClient` from the config file, profile, and flag overrides.
fn build_client(global: &GlobalOpts) -> Result<ApiClient, CliError> {
    let settings = config::resolve_settings(global)?;

    let tokens: Arc<dyn TokenProvider> = match settings.token.clone() {
        Some(token) => Arc::new(StaticTokenProvider::new(AccessToken {
            token,
            token_type: settings.token_type.clone(),
        })),
        None => Arc::new(NoAuth),
    };

    tracing::debug!(base_url = %settings.base_url, branch = %settings.branch, "building client");

    Ok(ApiClient::with_timeout(
        &settings.base_url,
        &settings.branch,
        settings.timeout,
        tokens,
    )?)
}
