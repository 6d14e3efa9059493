//! Error types for the laneboard store and repositories

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised on the store read path.
///
/// A missing row is never an error: repository lookups return
/// `Ok(None)` for absent identifiers.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database file not found at {path}")]
    Unavailable { path: PathBuf },

    #[error("failed to open database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_names_path() {
        let err = StoreError::Unavailable {
            path: PathBuf::from("/tmp/missing.db"),
        };
        assert!(err.to_string().contains("/tmp/missing.db"));
    }

    #[test]
    fn test_query_error_wraps_rusqlite() {
        let err = StoreError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, StoreError::Query(_)));
    }
}
