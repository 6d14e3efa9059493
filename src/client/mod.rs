//! Table client for the league API
//!
//! Terminal rendition of the roster table: fetches `/api/bowlers`,
//! defensively normalizes whatever shape comes back, and renders rows
//! with per-field fallback text. Shape problems degrade to an error
//! banner over an empty table; they never propagate.

pub mod fetch;
pub mod normalize;
pub mod record;
pub mod render;

pub use fetch::fetch_bowlers;
pub use normalize::{extract_records, ShapeError};
pub use record::BowlerRecord;
pub use render::render_roster;

use thiserror::Error;

/// Client-side errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
