//! HTTP server module
//!
//! Axum server exposing the league read API:
//!
//! - `/health` - Health check
//! - `/api/bowlers` - Featured-team roster, flattened
//! - `/api/bowlers/{id}` - Single bowler
//! - `/api/bowlers/teams` - Featured teams, id/name pairs
//! - `/api/test` - Store diagnostic probe

pub mod bowler_routes;
pub mod diagnostic_routes;
pub mod errors;
pub mod server;

pub use bowler_routes::{ApiState, FEATURED_TEAMS};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
