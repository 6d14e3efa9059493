//! CLI argument definitions using clap
//!
//! Commands:
//! - laneboard init --config <path> [--seed]
//! - laneboard serve --config <path>
//! - laneboard table --url <base>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// laneboard - bowling-league roster service
#[derive(Parser, Debug)]
#[command(name = "laneboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the league database file and schema
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./laneboard.json")]
        config: PathBuf,

        /// Also insert sample league data
        #[arg(long)]
        seed: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./laneboard.json")]
        config: PathBuf,
    },

    /// Fetch the roster from a running server and print it as a table
    Table {
        /// Base URL of the API server
        #[arg(long, default_value = "http://localhost:5080")]
        url: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
