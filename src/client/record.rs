//! Display records with per-field fallback text
//!
//! A malformed or partial record never breaks rendering: missing names
//! show as "Unknown", everything else as "N/A".

use serde_json::Value;

const FALLBACK_NAME: &str = "Unknown";
const FALLBACK_FIELD: &str = "N/A";

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BowlerRecord {
    pub name: String,
    pub team: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
}

impl BowlerRecord {
    /// Build a display record from an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Self {
        let first = field_or(value, "bowlerFirstName", FALLBACK_NAME);
        let last = field_or(value, "bowlerLastName", FALLBACK_NAME);
        let middle = match field(value, "bowlerMiddleInit") {
            Some(init) if !init.is_empty() => format!("{}. ", init),
            _ => String::new(),
        };

        Self {
            name: format!("{} {}{}", first, middle, last),
            team: field_or(value, "teamName", FALLBACK_FIELD),
            address: field_or(value, "bowlerAddress", FALLBACK_FIELD),
            city: field_or(value, "bowlerCity", FALLBACK_FIELD),
            state: field_or(value, "bowlerState", FALLBACK_FIELD),
            zip: field_or(value, "bowlerZip", FALLBACK_FIELD),
            phone: field_or(value, "bowlerPhoneNumber", FALLBACK_FIELD),
        }
    }
}

/// Field as display text: strings as-is, other scalars via Display,
/// null/missing as `None`.
fn field(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    }
}

fn field_or(value: &Value, key: &str, fallback: &str) -> String {
    field(value, key).unwrap_or_else(|| fallback.to_string())
}
