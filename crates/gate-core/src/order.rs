//! # Order Types
//!
//! Order creation request types and the opaque order object returned by the
//! payment provider.

use crate::error::{GatewayError, GatewayResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Razorpay caps receipt strings at 40 characters
const MAX_RECEIPT_LEN: usize = 40;

/// Supported settlement currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    INR,
    USD,
    EUR,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::INR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An order to be created with the payment provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Amount in minor currency units (paise for INR)
    pub amount: i64,

    /// Settlement currency
    #[serde(default)]
    pub currency: Currency,

    /// Merchant receipt reference, unique per order
    pub receipt: String,

    /// Whether the provider should capture the payment automatically
    #[serde(default = "default_true")]
    pub auto_capture: bool,

    /// Custom metadata passed through to the provider
    #[serde(default, skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub notes: std::collections::HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

impl OrderRequest {
    /// Create a new order request with a generated receipt
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            currency: Currency::INR,
            receipt: generate_receipt(),
            auto_capture: true,
            notes: std::collections::HashMap::new(),
        }
    }

    /// Builder: set currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builder: set a merchant-supplied receipt
    pub fn with_receipt(mut self, receipt: impl Into<String>) -> Self {
        self.receipt = receipt.into();
        self
    }

    /// Builder: disable automatic capture
    pub fn manual_capture(mut self) -> Self {
        self.auto_capture = false;
        self
    }

    /// Builder: add a metadata note
    pub fn with_note(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.notes.insert(key.into(), value.into());
        self
    }

    /// Validate the request before it is sent to the provider
    pub fn validate(&self) -> GatewayResult<()> {
        if self.amount <= 0 {
            return Err(GatewayError::InvalidRequest(format!(
                "Order amount must be positive, got {}",
                self.amount
            )));
        }
        if self.receipt.is_empty() {
            return Err(GatewayError::InvalidRequest(
                "Order receipt must not be empty".to_string(),
            ));
        }
        if self.receipt.len() > MAX_RECEIPT_LEN {
            return Err(GatewayError::InvalidRequest(format!(
                "Order receipt exceeds {} characters: {}",
                MAX_RECEIPT_LEN, self.receipt
            )));
        }
        Ok(())
    }
}

/// Generate a unique per-order receipt reference.
///
/// Simple (unhyphenated) UUID keeps the value under the provider's
/// 40-character receipt limit.
fn generate_receipt() -> String {
    format!("rcpt_{}", Uuid::new_v4().simple())
}

/// The order object returned by the provider.
///
/// The body is kept opaque and forwarded verbatim to the HTTP caller; only
/// the fields the gateway itself needs are picked out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOrder {
    /// Provider name (e.g., "razorpay")
    pub provider: String,

    /// Raw order object as returned by the provider
    pub body: serde_json::Value,

    /// When the gateway received the order
    pub received_at: DateTime<Utc>,
}

impl ProviderOrder {
    pub fn new(provider: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            provider: provider.into(),
            body,
            received_at: Utc::now(),
        }
    }

    /// Provider-assigned order ID, if present in the body
    pub fn id(&self) -> Option<&str> {
        self.body.get("id").and_then(|v| v.as_str())
    }
}
