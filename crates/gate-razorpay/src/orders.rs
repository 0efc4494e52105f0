//! # Razorpay Orders API
//!
//! Implementation of the Razorpay Orders API and payment callback
//! verification. Order creation is a single authenticated POST with no
//! retry; provider failures surface to the caller as a gateway error.

use crate::config::RazorpayConfig;
use async_trait::async_trait;
use gate_core::{
    GatewayError, GatewayResult, OrderRequest, PaymentCallback, PaymentProvider, ProviderOrder,
    SignatureVerifier, VerificationResult,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Razorpay payment provider.
///
/// Owns its configuration and HTTP client; constructed once at startup and
/// shared immutably across request tasks.
pub struct RazorpayProvider {
    config: RazorpayConfig,
    verifier: SignatureVerifier,
    client: Client,
}

impl RazorpayProvider {
    /// Create a new Razorpay provider
    pub fn new(config: RazorpayConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        // The API key secret doubles as the callback signing key
        let verifier = SignatureVerifier::new(config.key_secret.as_bytes());

        Self {
            config,
            verifier,
            client,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        let config = RazorpayConfig::from_env()?;
        Ok(Self::new(config))
    }
}

#[async_trait]
impl PaymentProvider for RazorpayProvider {
    #[instrument(skip(self, request), fields(receipt = %request.receipt))]
    async fn create_order(&self, request: &OrderRequest) -> GatewayResult<ProviderOrder> {
        request.validate()?;

        let body = RazorpayOrderBody {
            amount: request.amount,
            currency: request.currency.as_str(),
            receipt: &request.receipt,
            payment_capture: request.auto_capture,
            notes: &request.notes,
        };

        debug!(
            "Creating Razorpay order: amount={}, currency={}",
            request.amount, request.currency
        );

        let url = format!("{}/v1/orders", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Razorpay API error: status={}, body={}", status, body);

            // Parse Razorpay's error envelope
            if let Ok(error_response) = serde_json::from_str::<RazorpayErrorResponse>(&body) {
                return Err(GatewayError::ProviderError {
                    provider: "razorpay".to_string(),
                    message: error_response.error.description,
                });
            }

            return Err(GatewayError::ProviderError {
                provider: "razorpay".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let order_body: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            GatewayError::Serialization(format!("Failed to parse Razorpay response: {}", e))
        })?;

        let order = ProviderOrder::new("razorpay", order_body);

        info!(
            "Created Razorpay order: id={}",
            order.id().unwrap_or("unknown")
        );

        Ok(order)
    }

    fn verify_payment(&self, callback: &PaymentCallback) -> VerificationResult {
        self.verifier.verify_callback(callback)
    }

    fn provider_name(&self) -> &'static str {
        "razorpay"
    }
}

// =============================================================================
// Razorpay API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct RazorpayOrderBody<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    #[serde(serialize_with = "bool_as_int")]
    payment_capture: bool,
    #[serde(skip_serializing_if = "notes_is_empty")]
    notes: &'a std::collections::HashMap<String, String>,
}

fn notes_is_empty(notes: &&std::collections::HashMap<String, String>) -> bool {
    notes.is_empty()
}

/// Razorpay expects `payment_capture` as 0/1 rather than a JSON bool
fn bool_as_int<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorResponse {
    error: RazorpayError,
}

#[derive(Debug, Deserialize)]
struct RazorpayError {
    description: String,
    #[serde(default)]
    code: Option<String>,
}
