//! Auth - a TOTP authenticator for the command line.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use auth::cli::{execute, output, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("AUTH_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("auth=debug")
        } else {
            EnvFilter::new("auth=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command, cli.backend) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
