//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use gomoku_api::{AppState, build_app};
use gomoku_core::config::AppConfig;
use gomoku_service::RoomManager;

/// Test application context
#[derive(Clone)]
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for inspecting the room manager directly
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new test application with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Create a test application around an existing room manager
    pub fn with_rooms(rooms: Arc<RoomManager>) -> Self {
        let state = AppState::with_rooms(AppConfig::default(), rooms);
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// POST a JSON body
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// GET without a body
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Create a room and return its invite code
    pub async fn create_room(&self, name: &str, player_id: &str) -> String {
        let response = self
            .post(
                "/api/rooms",
                json!({ "player_name": name, "player_id": player_id }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["code"]
            .as_str()
            .expect("No code in create response")
            .to_string()
    }

    /// Seat Alice (`a`, black) and Bob (`b`, white), ready both, and
    /// return the room code
    pub async fn start_game(&self) -> String {
        let code = self.create_room("Alice", "a").await;
        let response = self
            .post(
                "/api/rooms/join",
                json!({ "code": code, "player_name": "Bob", "player_id": "b" }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

        self.post("/api/rooms/ready", json!({ "player_id": "a" }))
            .await;
        let response = self
            .post("/api/rooms/ready", json!({ "player_id": "b" }))
            .await;
        assert_eq!(response.body["data"]["status"], "in_progress");
        code
    }

    /// Place a stone for `player_id`
    pub async fn play(&self, player_id: &str, row: i32, col: i32) -> TestResponse {
        self.post(
            "/api/rooms/move",
            json!({ "player_id": player_id, "position": { "row": row, "col": col } }),
        )
        .await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (`Null` if not JSON)
    pub body: Value,
}
