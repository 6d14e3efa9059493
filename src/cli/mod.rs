//! CLI module for laneboard
//!
//! Provides command-line interface for:
//! - init: Create the database file and schema (optionally seeded)
//! - serve: Boot the HTTP API server
//! - table: Fetch the roster from a server and print it

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve, table};
pub use errors::{CliError, CliResult};
