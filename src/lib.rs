//! laneboard - a bowling-league roster service
//!
//! SQLite-backed REST API for league teams and bowlers, plus a terminal
//! table client consuming the same endpoints.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod http_server;
pub mod observability;
pub mod repository;
pub mod store;
