//! # gate-api
//!
//! HTTP API layer for razor-gate-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Order creation endpoint proxying the payment provider
//! - Payment confirmation callback verification
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/create-order` | Create an order with the provider |
//! | POST | `/verify-payment` | Verify a payment confirmation callback |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
