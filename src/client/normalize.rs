//! Response shape normalization
//!
//! The API has historically answered in more than one envelope (plain
//! array, reference-preserving `value` wrapper, `result` wrapper,
//! keyed object). This ordered fallback absorbs all of them; first
//! match wins.

use serde_json::Value;
use thiserror::Error;

/// Normalization fallback exhausted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("response body is null")]
    Null,

    #[error("response object has no values")]
    EmptyObject,

    #[error("unexpected response shape: {0}")]
    Unrecognized(&'static str),
}

/// Extract the record sequence from a response body of unknown shape.
///
/// Fallback order:
/// 1. body is an array - use it directly
/// 2. object with an array under `value` - use that array
/// 3. object with an array under `result` - use that array
/// 4. any other non-empty object - its values in key order
/// 5. anything else is unrecoverable
pub fn extract_records(body: &Value) -> Result<Vec<Value>, ShapeError> {
    match body {
        Value::Array(items) => Ok(items.clone()),

        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("value") {
                return Ok(items.clone());
            }
            if let Some(Value::Array(items)) = map.get("result") {
                return Ok(items.clone());
            }
            if map.is_empty() {
                return Err(ShapeError::EmptyObject);
            }
            Ok(map.values().cloned().collect())
        }

        Value::Null => Err(ShapeError::Null),
        Value::String(_) => Err(ShapeError::Unrecognized("string")),
        Value::Number(_) => Err(ShapeError::Unrecognized("number")),
        Value::Bool(_) => Err(ShapeError::Unrecognized("boolean")),
    }
}
