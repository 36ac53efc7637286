use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pk", about = concat!("[x] packlist v", env!("CARGO_PKG_VERSION"), " - what do you need to pack?"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a specific config file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply an intent script to a fresh list and print the result
    Run(RunArgs),
    /// Validate an intent script without applying it
    Check(CheckArgs),
    /// List the item categories
    Categories,
}

#[derive(Args)]
pub struct RunArgs {
    /// Script file (default: stdin; `-` also reads stdin)
    pub file: Option<PathBuf>,
    /// Search text applied after the script (overrides any `search` lines)
    #[arg(long)]
    pub search: Option<String>,
    /// Only print the stats summary
    #[arg(long)]
    pub stats_only: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Script file (default: stdin; `-` also reads stdin)
    pub file: Option<PathBuf>,
}
