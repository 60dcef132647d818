use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::{make_request_span, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Sessions
        .route("/sessions", post(handlers::login))
        .route("/sessions/current", delete(handlers::logout))
        // Profile
        .route(
            "/profile",
            get(handlers::get_profile).patch(handlers::update_profile),
        )
        .route("/interests", get(handlers::get_interests))
        // Recommendations
        .route("/recommendations", get(handlers::get_recommendations))
        .route("/recommendations/score", post(handlers::score))
        .route(
            "/recommendations/:id/breakdown",
            get(handlers::get_score_breakdown),
        )
        .route("/dashboard", get(handlers::dashboard))
}
