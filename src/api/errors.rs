use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::engine::ChessError;

/// Structured API error that serializes to JSON.
#[derive(Debug)]
pub enum ApiError {
    InvalidCoordinate(ChessError),
    IllegalMove(ChessError),
    OutOfTurn(ChessError),
    InvalidRequest(String),
    InternalError(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::InvalidCoordinate(err) => (
                StatusCode::BAD_REQUEST,
                "INVALID_COORDINATE",
                err.to_string(),
            ),
            ApiError::IllegalMove(err) => {
                (StatusCode::BAD_REQUEST, "ILLEGAL_MOVE", err.to_string())
            }
            ApiError::OutOfTurn(err) => (StatusCode::BAD_REQUEST, "OUT_OF_TURN", err.to_string()),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ChessError> for ApiError {
    fn from(err: ChessError) -> Self {
        match &err {
            ChessError::InvalidCoordinate(_) => ApiError::InvalidCoordinate(err),
            ChessError::IllegalMove { .. } => ApiError::IllegalMove(err),
            ChessError::OutOfTurn { .. } => ApiError::OutOfTurn(err),
            // Internal guards; they never escape the engine through normal use.
            ChessError::OutOfBounds { .. } | ChessError::UnplacedPiece => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}
