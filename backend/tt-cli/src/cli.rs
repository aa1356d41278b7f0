use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "taxtrack")]
#[command(about = "TaxTrack command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides TT_API_URL and config.toml)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
