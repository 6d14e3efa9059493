//! Read-only repositories over the league store
//!
//! The single source of truth for the read path: API handlers resolve a
//! repository, the repository queries the store and projects rows into
//! acyclic output shapes. No write operations.

pub mod bowlers;
pub mod teams;

pub use bowlers::BowlerRepository;
pub use teams::TeamRepository;
