//! CLI definitions for the Mergington activity server.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mergington High School activity registry.
#[derive(Parser)]
#[command(name = "mergington")]
#[command(about = "Extracurricular activity registry for Mergington High School")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Server host (overrides config)
        #[arg(long, env = "MERGINGTON_HOST")]
        host: Option<String>,

        /// Server port (overrides config)
        #[arg(long, env = "MERGINGTON_PORT")]
        port: Option<u16>,

        /// Static asset directory (overrides config)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Validate the configuration and print the seeded activities
    Check,
}
