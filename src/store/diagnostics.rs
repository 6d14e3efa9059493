//! Store health probe
//!
//! Operational troubleshooting only: reports whether the database file
//! exists, whether a connection opens, and row counts for both tables.
//! Carries no business contract. This is the single home for direct-SQL
//! probing; the read path goes through the repositories alone.

use chrono::{DateTime, Utc};
use rusqlite::params_from_iter;
use serde::Serialize;

use crate::error::Result;
use crate::store::models::TeamSummary;
use crate::store::schema::{in_placeholders, StoreHandle};

/// Result of probing the league store.
///
/// Fields are filled in probe order; a failure partway leaves the
/// remainder unset and records the cause in `error`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreProbe {
    pub database_path: String,
    pub file_exists: bool,
    pub probed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_opened: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowlers_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<TeamSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_bowlers_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Probe the store, filtering team-specific checks to `team_names`.
///
/// Never fails: any error encountered is folded into the report.
pub fn probe(handle: &StoreHandle, team_names: &[&str]) -> StoreProbe {
    let mut report = StoreProbe {
        database_path: handle.path().display().to_string(),
        file_exists: handle.path().exists(),
        probed_at: Utc::now(),
        connection_opened: None,
        teams_count: None,
        bowlers_count: None,
        teams: None,
        filtered_bowlers_count: None,
        error: None,
    };

    if !report.file_exists {
        return report;
    }

    if let Err(e) = run_checks(handle, team_names, &mut report) {
        report.error = Some(e.to_string());
    }

    report
}

fn run_checks(
    handle: &StoreHandle,
    team_names: &[&str],
    report: &mut StoreProbe,
) -> Result<()> {
    let conn = handle.connect()?;
    report.connection_opened = Some(true);

    report.teams_count = Some(conn.query_row("SELECT COUNT(*) FROM Teams", [], |row| {
        row.get(0)
    })?);

    report.bowlers_count = Some(conn.query_row("SELECT COUNT(*) FROM Bowlers", [], |row| {
        row.get(0)
    })?);

    let mut stmt = conn.prepare(&format!(
        "SELECT TeamID, TeamName FROM Teams WHERE TeamName IN ({})",
        in_placeholders(team_names.len())
    ))?;
    let teams = stmt
        .query_map(params_from_iter(team_names.iter()), |row| {
            Ok(TeamSummary {
                team_id: row.get(0)?,
                team_name: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    report.teams = Some(teams);

    report.filtered_bowlers_count = Some(conn.query_row(
        &format!(
            "SELECT COUNT(*)
             FROM Bowlers b
             JOIN Teams t ON b.TeamID = t.TeamID
             WHERE t.TeamName IN ({})",
            in_placeholders(team_names.len())
        ),
        params_from_iter(team_names.iter()),
        |row| row.get(0),
    )?);

    Ok(())
}
