use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skybook_core::CoreError;

#[derive(Debug)]
pub enum AppError {
    NotFoundError(String),
    ConflictError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let msg = err.to_string();
        match err {
            CoreError::NotFound(_) | CoreError::InvalidSeat { .. } => Self::NotFoundError(msg),
            CoreError::SeatUnavailable { .. } => Self::ConflictError(msg),
        }
    }
}

/// Repository failures are opaque to clients.
pub fn repo_error(err: Box<dyn std::error::Error + Send + Sync>) -> AppError {
    AppError::InternalServerError(err.to_string())
}
