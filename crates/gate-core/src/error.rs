//! # Gateway Error Types
//!
//! Typed error handling for the razor-gate payment gateway.
//! All fallible gateway operations return `Result<T, GatewayError>`.

use thiserror::Error;

/// Core error type for gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GatewayError::NetworkError(_) | GatewayError::ProviderError { .. }
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Configuration(_) => 500,
            GatewayError::InvalidRequest(_) => 400,
            GatewayError::ProviderError { .. } => 502,
            GatewayError::NetworkError(_) => 503,
            GatewayError::Serialization(_) => 500,
            GatewayError::Internal(_) => 500,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(GatewayError::NetworkError("timeout".into()).is_retryable());
        assert!(GatewayError::ProviderError {
            provider: "razorpay".into(),
            message: "gateway busy".into()
        }
        .is_retryable());
        assert!(!GatewayError::InvalidRequest("bad data".into()).is_retryable());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GatewayError::InvalidRequest("test".into()).status_code(),
            400
        );
        assert_eq!(
            GatewayError::ProviderError {
                provider: "razorpay".into(),
                message: "bad key".into()
            }
            .status_code(),
            502
        );
        assert_eq!(GatewayError::NetworkError("refused".into()).status_code(), 503);
    }
}
