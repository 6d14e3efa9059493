//! Bowler queries, projected to the flattened `BowlerView`

use rusqlite::{params, params_from_iter, Connection, Row};

use crate::error::Result;
use crate::observability::Logger;
use crate::store::models::BowlerView;
use crate::store::schema::in_placeholders;

const VIEW_COLUMNS: &str = "b.BowlerID, b.BowlerFirstName, b.BowlerMiddleInit, \
     b.BowlerLastName, b.BowlerAddress, b.BowlerCity, b.BowlerState, \
     b.BowlerZip, b.BowlerPhoneNumber, t.TeamName";

/// Read-only bowler queries.
///
/// Every result row is joined with its team so the projection carries
/// the team name instead of a back-reference.
pub struct BowlerRepository<'a> {
    conn: &'a Connection,
}

impl<'a> BowlerRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All bowlers in the league
    pub fn list_all(&self) -> Result<Vec<BowlerView>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {VIEW_COLUMNS}
             FROM Bowlers b
             JOIN Teams t ON b.TeamID = t.TeamID"
        ))?;

        let views = stmt
            .query_map([], row_to_view)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Logger::info("bowlers_list_all", &[("count", &views.len().to_string())]);
        Ok(views)
    }

    /// Bowlers whose team name is in `team_names` (exact match, no case
    /// normalization). Result ordering is store-determined.
    pub fn list_by_team(&self, team_names: &[&str]) -> Result<Vec<BowlerView>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {VIEW_COLUMNS}
             FROM Bowlers b
             JOIN Teams t ON b.TeamID = t.TeamID
             WHERE t.TeamName IN ({})",
            in_placeholders(team_names.len())
        ))?;

        let views = stmt
            .query_map(params_from_iter(team_names.iter()), row_to_view)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Logger::info(
            "bowlers_list_by_team",
            &[
                ("teams", &team_names.join(", ")),
                ("count", &views.len().to_string()),
            ],
        );
        Ok(views)
    }

    /// Single bowler by identifier. Absence is `Ok(None)`, not an error.
    pub fn get_by_id(&self, id: i64) -> Result<Option<BowlerView>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {VIEW_COLUMNS}
             FROM Bowlers b
             JOIN Teams t ON b.TeamID = t.TeamID
             WHERE b.BowlerID = ?"
        ))?;

        match stmt.query_row(params![id], row_to_view) {
            Ok(view) => Ok(Some(view)),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Logger::warn("bowler_not_found", &[("id", &id.to_string())]);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn row_to_view(row: &Row<'_>) -> std::result::Result<BowlerView, rusqlite::Error> {
    Ok(BowlerView {
        bowler_id: row.get(0)?,
        bowler_first_name: row.get(1)?,
        bowler_middle_init: row.get(2)?,
        bowler_last_name: row.get(3)?,
        bowler_address: row.get(4)?,
        bowler_city: row.get(5)?,
        bowler_state: row.get(6)?,
        bowler_zip: row.get(7)?,
        bowler_phone_number: row.get(8)?,
        team_name: row.get(9)?,
    })
}
