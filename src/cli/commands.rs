//! CLI command implementations

use std::path::Path;

use serde_json::json;

use crate::client::{fetch_bowlers, render_roster};
use crate::config::Config;
use crate::http_server::HttpServer;
use crate::observability::Logger;
use crate::store::schema::seed_sample_league;
use crate::store::StoreHandle;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config, seed } => init(&config, seed),
        Command::Serve { config } => serve(&config),
        Command::Table { url } => table(&url),
    }
}

/// Create the league database file and schema
pub fn init(config_path: &Path, seed: bool) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let handle = StoreHandle::new(&config.database_path);
    let conn = handle.initialize()?;

    if seed {
        seed_sample_league(&conn)?;
    }

    Logger::info(
        "init_complete",
        &[
            ("database", &config.database_path.display().to_string()),
            ("seeded", &seed.to_string()),
        ],
    );

    println!(
        "{}",
        json!({
            "initialized": true,
            "database": config.database_path.display().to_string(),
            "seeded": seed,
        })
    );

    Ok(())
}

/// Start the HTTP API server
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let server = HttpServer::with_config(config);

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Fetch the roster from a running server and print it as a table
pub fn table(base_url: &str) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    let body = rt.block_on(async {
        let client = reqwest::Client::new();
        fetch_bowlers(&client, base_url).await
    })?;

    print!("{}", render_roster(&body));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_init_creates_and_seeds_database() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("league.db");
        let config_path = dir.path().join("laneboard.json");

        let mut f = std::fs::File::create(&config_path).unwrap();
        write!(
            f,
            r#"{{"database_path": {:?}}}"#,
            db_path.display().to_string()
        )
        .unwrap();

        init(&config_path, true).unwrap();
        assert!(db_path.exists());

        let conn = StoreHandle::new(&db_path).connect().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM Bowlers", [], |row| row.get(0))
            .unwrap();
        assert!(count > 0);
    }

    #[test]
    fn test_init_without_seed_leaves_tables_empty() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("league.db");
        let config_path = dir.path().join("laneboard.json");

        std::fs::write(
            &config_path,
            format!(r#"{{"database_path": {:?}}}"#, db_path.display().to_string()),
        )
        .unwrap();

        init(&config_path, false).unwrap();

        let conn = StoreHandle::new(&db_path).connect().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM Teams", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
