//! Router configuration for the HTTP API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the frontend is served from a different origin
    // during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/compute-slots", post(handlers::compute_slots))
        .route("/generate-agenda", post(handlers::generate_agenda))
        .route("/refine-text", post(handlers::refine_text))
        .route(
            "/create-ics",
            get(handlers::create_ics_query).post(handlers::create_ics),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
