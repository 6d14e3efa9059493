//! Row types for the league store

use serde::{Deserialize, Serialize};

/// A league team as stored in the `Teams` table.
///
/// Deliberately carries no bowler collection: the back-reference lives
/// only in the database, so no serialized shape can reach a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: i64,
    pub team_name: String,
    pub captain_id: Option<i64>,
}

/// A bowler as stored in the `Bowlers` table.
///
/// Every bowler belongs to exactly one team (foreign key on `team_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bowler {
    pub bowler_id: i64,
    pub bowler_first_name: Option<String>,
    pub bowler_middle_init: Option<String>,
    pub bowler_last_name: Option<String>,
    pub bowler_address: Option<String>,
    pub bowler_city: Option<String>,
    pub bowler_state: Option<String>,
    pub bowler_zip: Option<String>,
    pub bowler_phone_number: Option<String>,
    pub team_id: i64,
}

/// Team projection exposed over the API: identifier and name only.
///
/// Used wherever a team is reported without pulling in its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub team_id: i64,
    pub team_name: String,
}

impl From<Team> for TeamSummary {
    fn from(team: Team) -> Self {
        Self {
            team_id: team.team_id,
            team_name: team.team_name,
        }
    }
}

/// Flattened bowler projection: all scalar fields plus the owning
/// team's name. The only bowler shape exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlerView {
    pub bowler_id: i64,
    pub bowler_first_name: Option<String>,
    pub bowler_middle_init: Option<String>,
    pub bowler_last_name: Option<String>,
    pub bowler_address: Option<String>,
    pub bowler_city: Option<String>,
    pub bowler_state: Option<String>,
    pub bowler_zip: Option<String>,
    pub bowler_phone_number: Option<String>,
    pub team_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bowler_view_serializes_camel_case() {
        let view = BowlerView {
            bowler_id: 10,
            bowler_first_name: Some("Amy".to_string()),
            bowler_middle_init: None,
            bowler_last_name: Some("Lee".to_string()),
            bowler_address: None,
            bowler_city: None,
            bowler_state: None,
            bowler_zip: None,
            bowler_phone_number: None,
            team_name: Some("Marlins".to_string()),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["bowlerId"], 10);
        assert_eq!(json["bowlerFirstName"], "Amy");
        assert_eq!(json["teamName"], "Marlins");
        // Snake-case keys must not leak into the wire format
        assert!(json.get("bowler_id").is_none());
    }

    #[test]
    fn test_team_has_no_bowler_collection() {
        let team = Team {
            team_id: 1,
            team_name: "Marlins".to_string(),
            captain_id: None,
        };

        let json = serde_json::to_value(&team).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(json.get("bowlers").is_none());
    }
}
