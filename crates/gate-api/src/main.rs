//! # Razor-Gate RS
//!
//! Thin payment gateway backend: order creation plus payment-signature
//! verification against Razorpay.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export RAZORPAY_KEY_ID=rzp_test_...
//! export RAZORPAY_KEY_SECRET=...
//!
//! # Run the server
//! razor-gate
//! ```

use gate_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state; a missing API secret aborts here
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider.provider_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 Razor-Gate starting on http://{}", addr);

    if !is_prod {
        info!("💳 Create order: POST http://{}/create-order", addr);
        info!("🔏 Verify payment: POST http://{}/verify-payment", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
