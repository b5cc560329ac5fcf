use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::relay::RelayError;

pub enum ApiError {
    Relay(RelayError),
    Validation(String),
}

impl From<RelayError> for ApiError {
    fn from(e: RelayError) -> Self {
        ApiError::Relay(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Relay(RelayError::MissingPath) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message("missing_path", "Missing path")),
            )
                .into_response(),
            ApiError::Relay(RelayError::NotAllowed(path)) => {
                log::warn!("Rejected relay path: {}", path);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorResponse::with_message(
                        "endpoint_not_allowed",
                        "Endpoint not allowed by proxy",
                    )),
                )
                    .into_response()
            }
            ApiError::Relay(e) => {
                log::error!("Proxy error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::with_message("proxy_error", "Proxy server error")),
                )
                    .into_response()
            }
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message("validation_failed", &msg)),
            )
                .into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
