use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Structured payload returned with not-found responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, detail: impl Into<String>) -> Self {
        ErrorResponse {
            message: message.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug)]
pub enum APIErrors {
    Unauthorized,
    NotFound(ErrorResponse),
    InternalServerError,
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        match self {
            APIErrors::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            APIErrors::NotFound(body) => (StatusCode::NOT_FOUND, Json(body)).into_response(),
            APIErrors::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
