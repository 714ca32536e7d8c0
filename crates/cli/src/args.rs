//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Assemble and inspect the codecompose runtime configuration.
#[derive(Parser, Debug)]
#[command(name = "codecompose", version, about)]
pub struct Cli {
    /// Load environment variables from this file instead of ./.env.
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the configuration and report whether startup would succeed.
    Check,
    /// Assemble and print the configuration (password redacted).
    Show {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Summary,
}
