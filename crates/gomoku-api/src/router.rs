//! Route definitions for the gomoku HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(room_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Room lifecycle, gameplay, and lookup
fn room_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/rooms",
            post(handlers::room::create_room).get(handlers::room::get_room_for_participant),
        )
        .route("/rooms/join", post(handlers::room::join_room))
        .route("/rooms/ready", post(handlers::room::toggle_ready))
        .route("/rooms/move", post(handlers::room::make_move))
        .route("/rooms/restart", post(handlers::room::restart_game))
        .route("/rooms/leave", post(handlers::room::leave_room))
        .route("/rooms/{code}", get(handlers::room::get_room))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
