//! Integration tests for the room API.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use gomoku_core::config::rooms::RoomsConfig;
use gomoku_core::types::InviteCode;
use gomoku_service::{CodeGenerator, RoomManager};

#[tokio::test]
async fn test_create_room() {
    let app = helpers::TestApp::new();

    let response = app
        .post(
            "/api/rooms",
            json!({ "player_name": "Alice", "player_id": "a" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    let room = &response.body["data"];
    assert_eq!(room["status"], "waiting");
    assert_eq!(room["code"].as_str().unwrap().len(), 6);
    assert_eq!(room["players"][0]["name"], "Alice");
    assert_eq!(room["players"][0]["color"], "black");
    assert_eq!(room["current_turn"], "black");
}

#[tokio::test]
async fn test_create_room_validation() {
    let app = helpers::TestApp::new();

    let response = app
        .post("/api/rooms", json!({ "player_name": "", "player_id": "a" }))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");

    let response = app
        .post("/api/rooms", json!({ "player_name": "Alice" }))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .post(
            "/api/rooms",
            json!({ "player_name": "x".repeat(40), "player_id": "a" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["reason"], "INVALID_PLAYER_NAME");
}

#[tokio::test]
async fn test_full_game_over_http() {
    let app = helpers::TestApp::new();
    let code = app.start_game().await;

    for col in 0..4 {
        let response = app.play("a", 7, 7 + col).await;
        assert_eq!(response.status, StatusCode::OK);
        let response = app.play("b", 8, 7 + col).await;
        assert_eq!(response.status, StatusCode::OK);
    }
    let response = app.play("a", 7, 11).await;
    assert_eq!(response.status, StatusCode::OK);
    let room = &response.body["data"];
    assert_eq!(room["status"], "finished");
    assert_eq!(room["winner"], "black");
    assert_eq!(room["players"][0]["wins"], 1);
    assert_eq!(room["players"][0]["ready"], false);
    assert_eq!(room["board"][7][11], "black");

    let response = app
        .post("/api/rooms/restart", json!({ "player_id": "b" }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "waiting");
    assert_eq!(response.body["data"]["winner"], serde_json::Value::Null);
    assert_eq!(response.body["data"]["board"][7][11], serde_json::Value::Null);

    let response = app.get(&format!("/api/rooms/{code}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["players"][0]["wins"], 1);
}

#[tokio::test]
async fn test_move_errors_map_to_422() {
    let app = helpers::TestApp::new();
    app.start_game().await;

    let response = app.play("b", 7, 7).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "INVALID_MOVE");
    assert_eq!(response.body["details"]["reason"], "NOT_YOUR_TURN");

    let response = app.play("a", 15, 0).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["details"]["reason"], "OUT_OF_BOUNDS");

    let response = app.play("a", -3, 2).await;
    assert_eq!(response.body["details"]["reason"], "OUT_OF_BOUNDS");

    app.play("a", 7, 7).await;
    let response = app.play("b", 7, 7).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["details"]["reason"], "CELL_OCCUPIED");
}

#[tokio::test]
async fn test_state_errors_map_to_409() {
    let app = helpers::TestApp::new();
    let code = app.start_game().await;

    let response = app
        .post("/api/rooms/ready", json!({ "player_id": "a" }))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["details"]["reason"], "GAME_IN_PROGRESS");

    let response = app
        .post(
            "/api/rooms/join",
            json!({ "code": code, "player_name": "Carol", "player_id": "c" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["details"]["reason"], "ROOM_FULL");

    let response = app
        .post("/api/rooms/restart", json!({ "player_id": "a" }))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["details"]["reason"], "GAME_NOT_FINISHED");
}

#[tokio::test]
async fn test_lookup() {
    let app = helpers::TestApp::new();
    let code = app.create_room("Alice", "a").await;

    let response = app.get(&format!("/api/rooms/{}", code.to_lowercase())).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["code"], code.as_str());

    let response = app.get("/api/rooms?player_id=a").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["code"], code.as_str());

    let response = app.get("/api/rooms/ZZZZZZ").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert_eq!(response.body["details"]["reason"], "ROOM_NOT_FOUND");

    let response = app.get("/api/rooms/bad!").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["details"]["reason"], "INVALID_INVITE_CODE");

    let response = app.get("/api/rooms?player_id=ghost").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.get("/api/rooms?player_id=").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_leave_flow() {
    let app = helpers::TestApp::new();
    let code = app.start_game().await;

    let response = app
        .post("/api/rooms/leave", json!({ "player_id": "b" }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["left"], true);
    assert_eq!(data["room_closed"], false);
    assert_eq!(data["room"]["status"], "finished");
    assert_eq!(data["room"]["winner"], serde_json::Value::Null);

    let response = app
        .post("/api/rooms/leave", json!({ "player_id": "b" }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["left"], false);

    let response = app
        .post("/api/rooms/leave", json!({ "player_id": "a" }))
        .await;
    assert_eq!(response.body["data"]["room_closed"], true);

    let response = app.get(&format!("/api/rooms/{code}")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.state.rooms.stats().active_rooms, 0);
}

#[tokio::test]
async fn test_concurrent_joins_over_http() {
    let app = helpers::TestApp::new();
    let code = app.create_room("Owner", "owner").await;

    let mut handles = Vec::new();
    for i in 0..3 {
        let app = app.clone();
        let code = code.clone();
        handles.push(tokio::spawn(async move {
            app.post(
                "/api/rooms/join",
                json!({
                    "code": code,
                    "player_name": format!("P{i}"),
                    "player_id": format!("p{i}"),
                }),
            )
            .await
            .status
        }));
    }

    let mut ok = 0;
    for handle in handles {
        let status = handle.await.unwrap();
        if status == StatusCode::OK {
            ok += 1;
        } else {
            assert_eq!(status, StatusCode::CONFLICT);
        }
    }
    assert_eq!(ok, 1);
    let room = app.state.rooms.get_room(&code).unwrap();
    assert_eq!(room.players.len(), 2);
}

/// Always proposes the same code.
#[derive(Debug)]
struct FixedCode;

impl CodeGenerator for FixedCode {
    fn generate(&self) -> InviteCode {
        InviteCode::parse("SAME00").unwrap()
    }
}

#[tokio::test]
async fn test_code_exhaustion_maps_to_503() {
    let config = RoomsConfig {
        code_attempts: 2,
        ..RoomsConfig::default()
    };
    let rooms = Arc::new(RoomManager::with_code_generator(config, Arc::new(FixedCode)));
    let app = helpers::TestApp::with_rooms(rooms);

    let code = app.create_room("Alice", "a").await;
    assert_eq!(code, "SAME00");

    let response = app
        .post("/api/rooms", json!({ "player_name": "Bob", "player_id": "b" }))
        .await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], "RESOURCE_EXHAUSTION");
    assert_eq!(response.body["details"]["reason"], "CODE_EXHAUSTED");
}
