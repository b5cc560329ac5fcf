use axum::{routing::get, Router};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::api::overview as overview_handlers;
use super::api::relay as relay_handlers;
use super::api_doc::ApiDoc;
use super::config::{Config, API_KEY_ENV};
use super::state::{AppState, StateError};
use super::ui::handlers as ui_handlers;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    State(#[from] StateError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // UI routes
        .route("/", get(ui_handlers::map_page))
        // Relay
        .route("/n2yo", get(relay_handlers::missing_path))
        .route("/n2yo/", get(relay_handlers::missing_path))
        .route("/n2yo/{*path}", get(relay_handlers::forward))
        // Tracker API endpoints
        .route("/api/overview", get(overview_handlers::overview))
        .route("/api/locate", get(overview_handlers::locate))
        // Static files
        .nest_service("/static", ServeDir::new("src/web/static"))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> Result<(), ServerError> {
    let bind_addr = config.web.bind.clone();
    let state = AppState::from_config(config)?;

    if !state.relay.has_credential() {
        log::warn!(
            "{} is not set; upstream calls will be forwarded without a key",
            API_KEY_ENV
        );
    }

    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn serves_map_page_with_default_location() {
        let mut config = Config::default();
        config.web.default_location = "51.5, -0.125".into();
        let app = router(AppState::from_config(config).unwrap());

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("value=\"51.5\""));
        assert!(html.contains("value=\"-0.125\""));
        assert!(html.contains("/static/map.js"));
    }

    #[tokio::test]
    async fn publishes_openapi_document() {
        let app = router(AppState::from_config(Config::default()).unwrap());

        let response = app
            .oneshot(
                Request::get("/api-doc/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(doc["paths"]["/api/overview"].is_object());
        assert!(doc["paths"]["/n2yo/{path}"].is_object());
    }
}
