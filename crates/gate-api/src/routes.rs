//! # Routes
//!
//! Axum router configuration for the payment gateway API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /         - Health check
/// - GET  /health   - Health check
/// - POST /create-order   - Create an order with the payment provider
/// - POST /verify-payment - Verify a payment confirmation callback
pub fn create_router(state: AppState) -> Router {
    // The storefront is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        .route("/create-order", post(handlers::create_order))
        .route("/verify-payment", post(handlers::verify_payment))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
