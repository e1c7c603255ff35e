use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use avail_wheels::cli::Cli;

fn main() -> anyhow::Result<()> {
    // stdout carries the listing, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    cli.execute()
}
