//! Store layer for laneboard
//!
//! A thin abstraction over the SQLite league database:
//! - `models`: Row types and the flattened API projection
//! - `schema`: Connection handling, schema creation, sample seeding
//! - `diagnostics`: Health probe used by the diagnostic endpoint

pub mod diagnostics;
pub mod models;
pub mod schema;

pub use models::{Bowler, BowlerView, Team, TeamSummary};
pub use schema::StoreHandle;
