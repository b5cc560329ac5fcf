use axum::{extract::State, response::IntoResponse};

use crate::web::state::AppState;

use super::templates::MapTemplate;

pub async fn map_page(State(state): State<AppState>) -> impl IntoResponse {
    let home = state.config.default_location();
    MapTemplate {
        default_lat: home.latitude,
        default_lon: home.longitude,
    }
}
