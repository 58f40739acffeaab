use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use blackboard_shared::config::CONFIG_PATH;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let public_dir = state.public_dir.clone();
    Router::new()
        .route(CONFIG_PATH, get(config_handler))
        .route("/ping", get(ping_handler))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn ping_handler() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

pub async fn config_handler(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!(api_url = %state.config.api_url, "serving client config");
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(state.config.as_ref().clone()),
    )
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod tests;
