//! Room session handlers.
//!
//! Each handler maps one request onto one room manager operation and wraps
//! the resulting snapshot in the success envelope.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use gomoku_entity::room::Room;
use gomoku_service::Departure;

use crate::dto::request::{
    CreateRoomRequest, JoinRoomRequest, MoveRequest, PlayerRequest, RoomLookupQuery, participant,
};
use crate::dto::response::{ApiResponse, LeaveResponse};
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, validate};
use crate::state::AppState;

type RoomResponse = Json<ApiResponse<Room>>;

/// POST /api/rooms
pub async fn create_room(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateRoomRequest>,
) -> Result<(StatusCode, RoomResponse), ApiError> {
    let room = state
        .rooms
        .create_room(&req.player_name, &participant(&req.player_id))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(room))))
}

/// POST /api/rooms/join
pub async fn join_room(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<JoinRoomRequest>,
) -> Result<RoomResponse, ApiError> {
    let room = state
        .rooms
        .join_room(&req.code, &req.player_name, &participant(&req.player_id))?;
    Ok(Json(ApiResponse::ok(room)))
}

/// POST /api/rooms/ready
pub async fn toggle_ready(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PlayerRequest>,
) -> Result<RoomResponse, ApiError> {
    let room = state.rooms.toggle_ready(&participant(&req.player_id))?;
    Ok(Json(ApiResponse::ok(room)))
}

/// POST /api/rooms/move
pub async fn make_move(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<MoveRequest>,
) -> Result<RoomResponse, ApiError> {
    let room = state
        .rooms
        .make_move(&participant(&req.player_id), req.position)?;
    Ok(Json(ApiResponse::ok(room)))
}

/// POST /api/rooms/restart
pub async fn restart_game(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PlayerRequest>,
) -> Result<RoomResponse, ApiError> {
    let room = state.rooms.restart_game(&participant(&req.player_id))?;
    Ok(Json(ApiResponse::ok(room)))
}

/// POST /api/rooms/leave
pub async fn leave_room(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PlayerRequest>,
) -> Result<Json<ApiResponse<LeaveResponse<Room>>>, ApiError> {
    let body = match state.rooms.leave_room(&participant(&req.player_id))? {
        Departure::Left(room) => LeaveResponse {
            left: true,
            room_closed: room.is_empty(),
            room: Some(room),
        },
        Departure::AlreadyLeft => LeaveResponse {
            left: false,
            room_closed: false,
            room: None,
        },
    };
    Ok(Json(ApiResponse::ok(body)))
}

/// GET /api/rooms/{code}
pub async fn get_room(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<RoomResponse, ApiError> {
    let room = state.rooms.get_room(&code)?;
    Ok(Json(ApiResponse::ok(room)))
}

/// GET /api/rooms?player_id=
pub async fn get_room_for_participant(
    State(state): State<AppState>,
    Query(query): Query<RoomLookupQuery>,
) -> Result<RoomResponse, ApiError> {
    validate(&query)?;
    let room = state
        .rooms
        .get_room_for_participant(&participant(&query.player_id))?;
    Ok(Json(ApiResponse::ok(room)))
}
