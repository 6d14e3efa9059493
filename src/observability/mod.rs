//! Observability for laneboard
//!
//! Structured JSON logging, process-wide and initialized once. Replaces
//! the per-handler append-to-file logging of earlier revisions of this
//! service.

pub mod logger;

pub use logger::{Logger, Severity};
