pub mod models;
pub mod sloths;

// Re-exports
pub use models::*;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(sloths::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Health handler (simple, keep here)
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let total_sloths = state.store.count().await.unwrap_or(0);
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_sloths,
    })
}

// Generic not-found page for any unmatched path
pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html("<!DOCTYPE html><html><head><title>404</title></head><body><h1>404 Not Found</h1></body></html>"),
    )
}
