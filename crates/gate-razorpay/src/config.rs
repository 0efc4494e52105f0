//! # Razorpay Configuration
//!
//! Configuration management for the Razorpay integration.
//! All secrets are loaded from environment variables at startup; a missing
//! or empty secret is a fatal configuration error, never a per-request one.

use gate_core::GatewayError;
use std::env;

/// Razorpay API configuration
#[derive(Clone)]
pub struct RazorpayConfig {
    /// API key ID (rzp_test_... or rzp_live_...)
    pub key_id: String,

    /// API key secret, used both for basic auth and as the HMAC key for
    /// callback signature verification
    pub key_secret: String,

    /// API base URL (overridable for mock-server tests)
    pub api_base_url: String,
}

impl RazorpayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `RAZORPAY_KEY_ID`
    /// - `RAZORPAY_KEY_SECRET`
    pub fn from_env() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let key_id = env::var("RAZORPAY_KEY_ID")
            .map_err(|_| GatewayError::Configuration("RAZORPAY_KEY_ID not set".to_string()))?;

        let key_secret = env::var("RAZORPAY_KEY_SECRET").map_err(|_| {
            GatewayError::Configuration("RAZORPAY_KEY_SECRET not set".to_string())
        })?;

        Self::new(key_id, key_secret).validated()
    }

    /// Create config with explicit values (for testing)
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Validate key formats, consuming and returning self
    pub fn validated(self) -> Result<Self, GatewayError> {
        if !self.key_id.starts_with("rzp_test_") && !self.key_id.starts_with("rzp_live_") {
            return Err(GatewayError::Configuration(
                "RAZORPAY_KEY_ID must start with rzp_test_ or rzp_live_".to_string(),
            ));
        }

        if self.key_secret.is_empty() {
            return Err(GatewayError::Configuration(
                "RAZORPAY_KEY_SECRET must not be empty".to_string(),
            ));
        }

        Ok(self)
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.key_id.starts_with("rzp_live_")
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

// The key secret must never reach logs or error output.
impl std::fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = RazorpayConfig::new("rzp_test_abc123", "secret123")
            .validated()
            .unwrap();
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());

        let config = RazorpayConfig::new("rzp_live_abc123", "secret123")
            .validated()
            .unwrap();
        assert!(!config.is_test_mode());
        assert!(config.is_live_mode());
    }

    #[test]
    fn test_bad_key_id_rejected() {
        let result = RazorpayConfig::new("sk_test_abc123", "secret123").validated();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let result = RazorpayConfig::new("rzp_test_abc123", "").validated();
        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = RazorpayConfig::new("rzp_test_abc123", "supersecret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("rzp_test_abc123"));
    }
}
