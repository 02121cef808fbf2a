use crate::utils::error::{BoardingError, ErrorCategory};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Internal(String),
}

impl From<BoardingError> for WebError {
    fn from(err: BoardingError) -> Self {
        match err.category() {
            ErrorCategory::Input => WebError::BadRequest(err.user_friendly_message()),
            _ => WebError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
