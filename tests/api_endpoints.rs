//! End-to-end tests for the league API
//!
//! Each test builds the full router over a seeded temporary SQLite
//! database and drives it with in-process requests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use laneboard::config::Config;
use laneboard::http_server::HttpServer;
use laneboard::store::schema::{insert_bowler, insert_team};
use laneboard::store::{Bowler, StoreHandle, Team};

fn router_for(db_path: &std::path::Path) -> Router {
    let config = Config {
        database_path: db_path.to_path_buf(),
        cors_origins: vec![],
        ..Default::default()
    };
    HttpServer::with_config(config).router()
}

/// Seed the minimal league: Marlins with a single bowler, Amy Lee.
fn seed_minimal(db_path: &std::path::Path) {
    let handle = StoreHandle::new(db_path);
    let conn = handle.initialize().unwrap();

    insert_team(
        &conn,
        &Team {
            team_id: 1,
            team_name: "Marlins".to_string(),
            captain_id: None,
        },
    )
    .unwrap();

    insert_bowler(
        &conn,
        &Bowler {
            bowler_id: 10,
            bowler_first_name: Some("Amy".to_string()),
            bowler_middle_init: None,
            bowler_last_name: Some("Lee".to_string()),
            bowler_address: None,
            bowler_city: None,
            bowler_state: None,
            bowler_zip: None,
            bowler_phone_number: None,
            team_id: 1,
        },
    )
    .unwrap();
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get(router, uri).await;
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn bowlers_endpoint_returns_seeded_roster() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("league.db");
    seed_minimal(&db_path);

    let (status, body) = get_json(router_for(&db_path), "/api/bowlers").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["bowlerId"], 10);
    assert_eq!(records[0]["bowlerFirstName"], "Amy");
    assert_eq!(records[0]["bowlerLastName"], "Lee");
    assert_eq!(records[0]["teamName"], "Marlins");
}

#[tokio::test]
async fn bowler_by_id_returns_matching_view() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("league.db");
    seed_minimal(&db_path);

    let (status, body) = get_json(router_for(&db_path), "/api/bowlers/10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bowlerId"], 10);
    assert_eq!(body["teamName"], "Marlins");
    // Optional fields serialize as explicit nulls
    assert!(body["bowlerAddress"].is_null());
}

#[tokio::test]
async fn missing_bowler_is_404_with_empty_body() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("league.db");
    seed_minimal(&db_path);

    let (status, bytes) = get(router_for(&db_path), "/api/bowlers/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn teams_endpoint_is_id_name_pairs_only() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("league.db");
    seed_minimal(&db_path);

    let (status, body) = get_json(router_for(&db_path), "/api/bowlers/teams").await;

    assert_eq!(status, StatusCode::OK);
    let teams = body.as_array().unwrap();
    assert_eq!(teams.len(), 1);

    let team = teams[0].as_object().unwrap();
    assert_eq!(team["teamId"], 1);
    assert_eq!(team["teamName"], "Marlins");
    // No bowler collection reachable from the payload
    assert_eq!(team.len(), 2);
}

#[tokio::test]
async fn empty_match_is_an_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("league.db");
    // Schema exists but no teams match the featured set
    StoreHandle::new(&db_path).initialize().unwrap();

    let (status, body) = get_json(router_for(&db_path), "/api/bowlers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn missing_database_is_500_with_generic_body() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("never-created.db");

    let (status, body) = get_json(router_for(&db_path), "/api/bowlers").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 500);
    let message = body["error"].as_str().unwrap();
    // Internal detail stays server-side
    assert!(!message.contains("never-created"));
}

#[tokio::test]
async fn diagnostic_probe_reports_seeded_store() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("league.db");
    seed_minimal(&db_path);

    let (status, body) = get_json(router_for(&db_path), "/api/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fileExists"], true);
    assert_eq!(body["connectionOpened"], true);
    assert_eq!(body["teamsCount"], 1);
    assert_eq!(body["bowlersCount"], 1);
    assert_eq!(body["filteredBowlersCount"], 1);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn diagnostic_probe_survives_missing_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("never-created.db");

    let (status, body) = get_json(router_for(&db_path), "/api/test").await;

    // Probe failures are reported, not raised
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fileExists"], false);
}

#[tokio::test]
async fn health_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("league.db");

    let (status, body) = get_json(router_for(&db_path), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
