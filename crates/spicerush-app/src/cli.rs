use std::path::PathBuf;

use clap::Parser;

/// Spice Rush: the Spice Rush web game in a native window.
#[derive(Parser, Debug)]
#[command(name = "spicerush", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Load this page instead of the configured content URL.
    #[arg(long)]
    pub url: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
