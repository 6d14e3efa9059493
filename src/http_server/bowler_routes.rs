//! Bowler HTTP routes
//!
//! `/bowlers` endpoints backed by the repositories. Each request opens
//! its own store connection on the blocking pool; no state is shared
//! across requests beyond the database path.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use rusqlite::Connection;

use crate::error::Result as StoreResult;
use crate::repository::{BowlerRepository, TeamRepository};
use crate::store::models::{BowlerView, TeamSummary};
use crate::store::StoreHandle;

use super::errors::{ApiError, ApiResult};

/// Team filter baked into the roster endpoints. The league UI shows
/// only these two divisions; this is not a request parameter.
pub const FEATURED_TEAMS: [&str; 2] = ["Marlins", "Sharks"];

/// Shared state for bowler routes
pub struct ApiState {
    pub store: StoreHandle,
}

impl ApiState {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }
}

/// Create bowler routes
pub fn bowler_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/bowlers", get(list_bowlers_handler))
        .route("/bowlers/teams", get(list_teams_handler))
        .route("/bowlers/{id}", get(get_bowler_handler))
        .with_state(state)
}

/// Run a repository call on the blocking pool with a request-scoped
/// connection.
async fn with_connection<T, F>(state: &ApiState, query: F) -> ApiResult<T>
where
    F: FnOnce(&Connection) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || {
        let conn = store.connect()?;
        query(&conn)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?
    .map_err(ApiError::from)
}

/// GET /bowlers — every bowler on the featured teams, flattened
async fn list_bowlers_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<BowlerView>>> {
    let views = with_connection(&state, |conn| {
        BowlerRepository::new(conn).list_by_team(&FEATURED_TEAMS)
    })
    .await?;

    Ok(Json(views))
}

/// GET /bowlers/{id} — single bowler, 404 with empty body when absent
async fn get_bowler_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<BowlerView>> {
    let view = with_connection(&state, move |conn| {
        BowlerRepository::new(conn).get_by_id(id)
    })
    .await?;

    match view {
        Some(view) => Ok(Json(view)),
        None => Err(ApiError::NotFound),
    }
}

/// GET /bowlers/teams — featured teams as {teamId, teamName} pairs only
async fn list_teams_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<TeamSummary>>> {
    let teams = with_connection(&state, |conn| {
        TeamRepository::new(conn).list_by_name(&FEATURED_TEAMS)
    })
    .await?;

    let summaries = teams.into_iter().map(TeamSummary::from).collect();
    Ok(Json(summaries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_teams_constant() {
        assert_eq!(FEATURED_TEAMS, ["Marlins", "Sharks"]);
    }

    #[test]
    fn test_router_builds() {
        let state = Arc::new(ApiState::new(StoreHandle::new("./league.db")));
        let _router = bowler_routes(state);
    }
}
