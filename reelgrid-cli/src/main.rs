//! Reelgrid CLI - Command-line interface
//!
//! Mounts the movie search widget on the terminal.

mod commands;
mod tracing_setup;

use std::path::PathBuf;

use clap::Parser;

use crate::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "reelgrid")]
#[command(about = "Search a movie catalog and show titles with working posters")]
struct Cli {
    /// Console log level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn, global = true)]
    log_level: CliLogLevel,
    /// Directory for the full debug log
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())?;

    commands::handle_command(cli.command).await
}
