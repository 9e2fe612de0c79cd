//! Integration tests for the health endpoint.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_ok() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(response.body["data"]["rooms"]["active_rooms"], 0);
}

#[tokio::test]
async fn test_health_reports_room_counters() {
    let app = helpers::TestApp::new();
    app.start_game().await;
    app.create_room("Carol", "c").await;

    let response = app.get("/api/health").await;

    let rooms = &response.body["data"]["rooms"];
    assert_eq!(rooms["active_rooms"], 2);
    assert_eq!(rooms["seated_players"], 3);
    assert_eq!(rooms["games_started"], 1);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = helpers::TestApp::new();
    let response = app.get("/api/nope").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
