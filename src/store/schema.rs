//! Database connection handling and schema management

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use crate::error::{Result, StoreError};
use crate::store::models::{Bowler, Team};

/// Handle to the league database file.
///
/// Holds only the path: each request opens its own scoped connection,
/// so there is no shared mutable state between requests. SQLite does
/// its own locking underneath.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    path: PathBuf,
}

impl StoreHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection to an existing database.
    ///
    /// A missing file is `StoreError::Unavailable` rather than a silent
    /// `Connection::open` that would create an empty database.
    pub fn connect(&self) -> Result<Connection> {
        if !self.path.exists() {
            return Err(StoreError::Unavailable {
                path: self.path.clone(),
            });
        }

        Connection::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })
    }

    /// Create the database file (and parent directories) and ensure the
    /// schema exists. Used by `laneboard init` and by tests.
    pub fn initialize(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })?;
        initialize_schema(&conn)?;
        Ok(conn)
    }
}

/// Create the `Teams` and `Bowlers` tables if they do not exist.
///
/// Column names match the historical league database (`TeamID`,
/// `BowlerFirstName`, ...), so an existing file keeps working.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS Teams (
            TeamID INTEGER PRIMARY KEY,
            TeamName TEXT NOT NULL,
            CaptainID INTEGER
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS Bowlers (
            BowlerID INTEGER PRIMARY KEY,
            BowlerFirstName TEXT,
            BowlerMiddleInit TEXT,
            BowlerLastName TEXT,
            BowlerAddress TEXT,
            BowlerCity TEXT,
            BowlerState TEXT,
            BowlerZip TEXT,
            BowlerPhoneNumber TEXT,
            TeamID INTEGER NOT NULL,
            FOREIGN KEY (TeamID) REFERENCES Teams(TeamID)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_bowlers_team
         ON Bowlers(TeamID)",
        [],
    )?;

    Ok(())
}

/// Placeholder list for a SQL `IN (...)` clause
pub(crate) fn in_placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// Insert a team row
pub fn insert_team(conn: &Connection, team: &Team) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO Teams (TeamID, TeamName, CaptainID)
         VALUES (?, ?, ?)",
        params![team.team_id, team.team_name, team.captain_id],
    )?;
    Ok(())
}

/// Insert a bowler row
pub fn insert_bowler(conn: &Connection, bowler: &Bowler) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO Bowlers
         (BowlerID, BowlerFirstName, BowlerMiddleInit, BowlerLastName,
          BowlerAddress, BowlerCity, BowlerState, BowlerZip,
          BowlerPhoneNumber, TeamID)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            bowler.bowler_id,
            bowler.bowler_first_name,
            bowler.bowler_middle_init,
            bowler.bowler_last_name,
            bowler.bowler_address,
            bowler.bowler_city,
            bowler.bowler_state,
            bowler.bowler_zip,
            bowler.bowler_phone_number,
            bowler.team_id
        ],
    )?;
    Ok(())
}

/// Seed a small sample league: three teams, a handful of bowlers.
pub fn seed_sample_league(conn: &Connection) -> Result<()> {
    let teams = [
        Team {
            team_id: 1,
            team_name: "Marlins".to_string(),
            captain_id: Some(10),
        },
        Team {
            team_id: 2,
            team_name: "Sharks".to_string(),
            captain_id: Some(12),
        },
        Team {
            team_id: 3,
            team_name: "Terrapins".to_string(),
            captain_id: None,
        },
    ];

    let bowlers = [
        sample_bowler(10, "Amy", None, "Lee", 1),
        sample_bowler(11, "Barbara", Some("R"), "Fuller", 1),
        sample_bowler(12, "David", None, "Viescas", 2),
        sample_bowler(13, "John", Some("A"), "Kennedy", 2),
        sample_bowler(14, "Sara", None, "Sheskey", 3),
    ];

    for team in &teams {
        insert_team(conn, team)?;
    }
    for bowler in &bowlers {
        insert_bowler(conn, bowler)?;
    }

    Ok(())
}

fn sample_bowler(
    id: i64,
    first: &str,
    middle: Option<&str>,
    last: &str,
    team_id: i64,
) -> Bowler {
    Bowler {
        bowler_id: id,
        bowler_first_name: Some(first.to_string()),
        bowler_middle_init: middle.map(|s| s.to_string()),
        bowler_last_name: Some(last.to_string()),
        bowler_address: Some("123 Main St".to_string()),
        bowler_city: Some("Bellevue".to_string()),
        bowler_state: Some("WA".to_string()),
        bowler_zip: Some("98004".to_string()),
        bowler_phone_number: Some("555-2671".to_string()),
        team_id,
    }
}
