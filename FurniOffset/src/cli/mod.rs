//! FurniOffset CLI - Command-line interface for furniture conversion

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "furnioffset")]
#[command(
    version,
    about = "FurniOffset: furniture XML to furni.json conversion",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the FurniOffset CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
