//! Team queries

use rusqlite::{params, params_from_iter, Connection, Row};

use crate::error::Result;
use crate::observability::Logger;
use crate::store::models::Team;
use crate::store::schema::in_placeholders;

/// Read-only team queries
pub struct TeamRepository<'a> {
    conn: &'a Connection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All teams in the league
    pub fn list_all(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT TeamID, TeamName, CaptainID FROM Teams")?;

        let teams = stmt
            .query_map([], row_to_team)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Logger::info("teams_list_all", &[("count", &teams.len().to_string())]);
        Ok(teams)
    }

    /// Teams whose name is in `names` (exact match)
    pub fn list_by_name(&self, names: &[&str]) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT TeamID, TeamName, CaptainID FROM Teams
             WHERE TeamName IN ({})",
            in_placeholders(names.len())
        ))?;

        let teams = stmt
            .query_map(params_from_iter(names.iter()), row_to_team)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Logger::info(
            "teams_list_by_name",
            &[
                ("names", &names.join(", ")),
                ("count", &teams.len().to_string()),
            ],
        );
        Ok(teams)
    }

    /// Single team by identifier. Absence is `Ok(None)`.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT TeamID, TeamName, CaptainID FROM Teams WHERE TeamID = ?")?;

        match stmt.query_row(params![id], row_to_team) {
            Ok(team) => Ok(Some(team)),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Logger::warn("team_not_found", &[("id", &id.to_string())]);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn row_to_team(row: &Row<'_>) -> std::result::Result<Team, rusqlite::Error> {
    Ok(Team {
        team_id: row.get(0)?,
        team_name: row.get(1)?,
        captain_id: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::{seed_sample_league, StoreHandle};

    fn seeded_conn(dir: &tempfile::TempDir) -> Connection {
        let handle = StoreHandle::new(dir.path().join("league.db"));
        let conn = handle.initialize().unwrap();
        seed_sample_league(&conn).unwrap();
        conn
    }

    #[test]
    fn test_list_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let conn = seeded_conn(&dir);
        let repo = TeamRepository::new(&conn);

        let teams = repo.list_by_name(&["Marlins", "Sharks"]).unwrap();
        assert_eq!(teams.len(), 2);
        for team in &teams {
            assert!(team.team_name == "Marlins" || team.team_name == "Sharks");
        }
    }

    #[test]
    fn test_get_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let conn = seeded_conn(&dir);
        let repo = TeamRepository::new(&conn);

        let team = repo.get_by_id(1).unwrap().unwrap();
        assert_eq!(team.team_name, "Marlins");
        assert_eq!(team.captain_id, Some(10));

        assert!(repo.get_by_id(42).unwrap().is_none());
    }

    #[test]
    fn test_list_all() {
        let dir = tempfile::tempdir().unwrap();
        let conn = seeded_conn(&dir);
        let repo = TeamRepository::new(&conn);

        assert_eq!(repo.list_all().unwrap().len(), 3);
    }
}
