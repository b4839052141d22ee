use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service info and health check
        .route("/", get(handlers::info))
        .route("/health", get(handlers::health))
        // Matrix processing (requires a bearer credential)
        .route("/matrix/process", post(handlers::matrix::process_matrix))
        // State and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
