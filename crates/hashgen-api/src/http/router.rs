//! Axum router configuration with middleware.
//!
//! Routes: `POST /api/hash`, `GET /api/health`. Other methods on those paths
//! answer 405 with a JSON error body.
//! Middleware: CORS, tracing.

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::error::AppError;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/hash",
            post(handlers::hash::generate_hash).fallback(method_not_allowed),
        )
        .route(
            "/api/health",
            get(handlers::health::health_check).fallback(method_not_allowed),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
