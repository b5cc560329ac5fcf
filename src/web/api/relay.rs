use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::relay::{RelayBody, RelayError};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/n2yo/{path}",
    tag = "relay",
    params(
        ("path" = String, Path, description = "Upstream path, e.g. satellite/positions/25544/22.3/114.2/0/60"),
    ),
    responses(
        (status = 200, description = "Upstream body, relayed with the upstream status"),
        (status = 400, description = "Missing path", body = ErrorResponse),
        (status = 403, description = "Endpoint not allowed by proxy", body = ErrorResponse),
        (status = 500, description = "Proxy server error", body = ErrorResponse)
    )
)]
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> ApiResult<Response> {
    let response = state.relay.forward(&path, &query).await?;

    Ok(match response.body {
        RelayBody::Json(value) => (response.status, Json(value)).into_response(),
        RelayBody::Text(text) => (response.status, text).into_response(),
    })
}

pub async fn missing_path() -> ApiError {
    ApiError::from(RelayError::MissingPath)
}
