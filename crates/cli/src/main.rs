//! recurra CLI entry point.

use clap::Parser;
use recurra_cli::cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // stdout carries command output, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recurra_cli=warn,recurra_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "Running command");

    let output = recurra_cli::run(&cli)?;
    println!("{}", output);

    Ok(())
}
