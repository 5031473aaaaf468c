//! TexSplice CLI - extract and repack DDS textures in game containers

pub mod commands;
pub mod interactive;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;

use crate::config::TexSpliceConfig;

#[derive(Parser)]
#[command(name = "texsplice", version)]
#[command(
    about = "TexSplice: extract and repack DDS textures in game data files",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to texsplice/config.toml in the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Run the TexSplice CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = TexSpliceConfig::load(cli.config.as_deref())?;
    cli.command.execute(&config)?;

    Ok(())
}
