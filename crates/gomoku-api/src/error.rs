//! Maps domain errors to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use gomoku_core::error::{AppError, ErrorKind};
use gomoku_service::RoomError;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Handler error: an [`AppError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// HTTP status for this error's kind.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::InvalidMove => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::ResourceExhaustion => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The finer-grained room failure reason, when the cause is a room error.
    fn reason(&self) -> Option<&'static str> {
        self.0
            .source
            .as_deref()
            .and_then(|source| source.downcast_ref::<RoomError>())
            .map(RoomError::code)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<RoomError> for ApiError {
    fn from(err: RoomError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Request failed");
        }

        let body = ApiErrorResponse {
            error: self.0.kind.as_str().to_string(),
            message: self.0.message.clone(),
            details: self
                .reason()
                .map(|reason| serde_json::json!({ "reason": reason })),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_entity::board::Position;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (RoomError::RoomNotFound, StatusCode::NOT_FOUND),
            (RoomError::RoomFull, StatusCode::CONFLICT),
            (RoomError::NotYourTurn, StatusCode::UNPROCESSABLE_ENTITY),
            (
                RoomError::CellOccupied(Position::new(0, 0)),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                RoomError::CodeExhausted { attempts: 10 },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                RoomError::InvalidInviteCode("x".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
        assert_eq!(
            ApiError::from(AppError::internal("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_reason_only_for_room_errors() {
        assert_eq!(
            ApiError::from(RoomError::NotYourTurn).reason(),
            Some("NOT_YOUR_TURN")
        );
        assert_eq!(ApiError::from(AppError::validation("bad")).reason(), None);
    }
}
