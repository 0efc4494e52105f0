//! # Application State
//!
//! Shared state for the Axum application.
//! The payment provider is constructed once at startup and injected here;
//! a missing or invalid API secret aborts startup instead of degrading into
//! per-request failures.

use gate_core::BoxedPaymentProvider;
use gate_razorpay::RazorpayProvider;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider
    pub provider: BoxedPaymentProvider,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the Razorpay provider from the environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let provider = RazorpayProvider::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Razorpay: {}", e))?;

        Ok(Self {
            provider: Arc::new(provider) as BoxedPaymentProvider,
            config,
        })
    }

    /// Create state with an explicit provider (for tests)
    pub fn with_provider(provider: BoxedPaymentProvider, config: AppConfig) -> Self {
        Self { provider, config }
    }
}
