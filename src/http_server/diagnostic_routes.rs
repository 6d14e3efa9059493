//! Diagnostic HTTP routes
//!
//! `/test` store probe and the `/health` check. Troubleshooting surface
//! only; the probe reports partial results with an `error` field rather
//! than failing the request.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::observability::Logger;
use crate::store::diagnostics::{self, StoreProbe};

use super::bowler_routes::{ApiState, FEATURED_TEAMS};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create diagnostic routes (nested alongside the bowler routes)
pub fn diagnostic_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/test", get(store_probe_handler))
        .with_state(state)
}

/// Health check route at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /test — probe the store and report what was found.
///
/// Always 200: a failed probe is itself a useful diagnostic result.
async fn store_probe_handler(State(state): State<Arc<ApiState>>) -> Json<StoreProbe> {
    let store = state.store.clone();
    let report = match tokio::task::spawn_blocking(move || {
        diagnostics::probe(&store, &FEATURED_TEAMS)
    })
    .await
    {
        Ok(report) => report,
        Err(e) => StoreProbe {
            database_path: state.store.path().display().to_string(),
            file_exists: state.store.path().exists(),
            probed_at: chrono::Utc::now(),
            connection_opened: None,
            teams_count: None,
            bowlers_count: None,
            teams: None,
            filtered_bowlers_count: None,
            error: Some(format!("probe task failed: {}", e)),
        },
    };

    Logger::info(
        "store_probe",
        &[
            ("file_exists", &report.file_exists.to_string()),
            (
                "error",
                report.error.as_deref().unwrap_or("none"),
            ),
        ],
    );

    Json(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
    }
}
