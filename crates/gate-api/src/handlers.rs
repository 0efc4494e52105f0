//! # Request Handlers
//!
//! Axum request handlers for the payment gateway API.
//! The storefront creates an order before opening the provider's checkout,
//! then posts the confirmation callback here for signature verification.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use gate_core::{Currency, GatewayError, OrderRequest, PaymentCallback, VerificationResult};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create order request
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in minor currency units (paise for INR)
    pub amount: i64,
    /// Settlement currency (defaults to INR)
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Merchant receipt reference (generated when omitted)
    #[serde(default)]
    pub receipt: Option<String>,
    /// Custom metadata to pass through to the provider
    #[serde(default)]
    pub notes: std::collections::HashMap<String, String>,
}

/// Payment confirmation callback request.
///
/// Field names follow the provider's callback payload and are treated as
/// opaque strings.
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// Payment verification response
#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

fn gateway_error_to_response(err: GatewayError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "razor-gate",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create an order with the payment provider
#[instrument(skip(state, request), fields(amount = request.amount))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let mut order_request = OrderRequest::new(request.amount);

    if let Some(currency) = request.currency {
        order_request = order_request.with_currency(currency);
    }

    if let Some(receipt) = request.receipt {
        order_request = order_request.with_receipt(receipt);
    }

    for (key, value) in request.notes {
        order_request = order_request.with_note(key, value);
    }

    info!(
        "Creating order: amount={}, currency={}, receipt={}",
        order_request.amount, order_request.currency, order_request.receipt
    );

    let order = state
        .provider
        .create_order(&order_request)
        .await
        .map_err(|e| {
            error!("Failed to create order: {}", e);
            gateway_error_to_response(e)
        })?;

    info!(
        "Created order: provider={}, id={}",
        order.provider,
        order.id().unwrap_or("unknown")
    );

    // The storefront hands the raw order object to the provider's checkout
    Ok(Json(order.body))
}

/// Verify a payment confirmation callback.
///
/// Rejection is a routine outcome (tampering, provider error), reported in
/// the response body with HTTP 200 rather than a transport-level error.
#[instrument(skip(state, request))]
pub async fn verify_payment(
    State(state): State<AppState>,
    Json(request): Json<VerifyPaymentRequest>,
) -> Json<VerifyPaymentResponse> {
    let callback = PaymentCallback::new(
        request.razorpay_order_id,
        request.razorpay_payment_id,
        request.razorpay_signature,
    );

    match state.provider.verify_payment(&callback) {
        VerificationResult::Accepted => {
            info!("Payment verified: order_id={}", callback.order_id);
            Json(VerifyPaymentResponse {
                success: true,
                message: None,
            })
        }
        VerificationResult::Rejected(reason) => {
            warn!(
                "Payment verification rejected: order_id={}, reason={}",
                callback.order_id, reason
            );
            Json(VerifyPaymentResponse {
                success: false,
                message: Some(reason.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;
    use crate::state::AppConfig;
    use async_trait::async_trait;
    use axum_test::TestServer;
    use gate_core::{
        compute_signature, GatewayResult, PaymentProvider, ProviderOrder, SignatureVerifier,
    };
    use serde_json::json;
    use std::sync::Arc;

    const TEST_SECRET: &[u8] = b"test_secret";

    /// In-memory provider: canned order response, real signature verification
    struct FakeProvider {
        verifier: SignatureVerifier,
    }

    impl FakeProvider {
        fn new() -> Self {
            Self {
                verifier: SignatureVerifier::new(TEST_SECRET),
            }
        }
    }

    #[async_trait]
    impl PaymentProvider for FakeProvider {
        async fn create_order(&self, request: &OrderRequest) -> GatewayResult<ProviderOrder> {
            request.validate()?;
            Ok(ProviderOrder::new(
                "razorpay",
                json!({
                    "id": "order_ABC123",
                    "amount": request.amount,
                    "currency": request.currency.as_str(),
                    "receipt": request.receipt,
                    "status": "created"
                }),
            ))
        }

        fn verify_payment(&self, callback: &PaymentCallback) -> VerificationResult {
            self.verifier.verify_callback(callback)
        }

        fn provider_name(&self) -> &'static str {
            "razorpay"
        }
    }

    fn test_server() -> TestServer {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
        };
        let state = AppState::with_provider(Arc::new(FakeProvider::new()), config);
        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let server = test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "razor-gate");
    }

    #[tokio::test]
    async fn test_create_order_forwards_provider_body() {
        let server = test_server();

        let response = server
            .post("/create-order")
            .json(&json!({"amount": 50000}))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["id"], "order_ABC123");
        assert_eq!(body["amount"], 50000);
        assert_eq!(body["currency"], "INR");
        assert_eq!(body["status"], "created");
    }

    #[tokio::test]
    async fn test_create_order_invalid_amount() {
        let server = test_server();

        let response = server
            .post("/create-order")
            .json(&json!({"amount": 0}))
            .await;
        response.assert_status_bad_request();

        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_verify_payment_accepts_valid_signature() {
        let server = test_server();
        let signature = compute_signature(TEST_SECRET, "order_ABC123", "pay_XYZ789");

        let response = server
            .post("/verify-payment")
            .json(&json!({
                "razorpay_order_id": "order_ABC123",
                "razorpay_payment_id": "pay_XYZ789",
                "razorpay_signature": signature
            }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_verify_payment_rejects_tampered_payment_id() {
        let server = test_server();
        let signature = compute_signature(TEST_SECRET, "order_ABC123", "pay_XYZ789");

        let response = server
            .post("/verify-payment")
            .json(&json!({
                "razorpay_order_id": "order_ABC123",
                "razorpay_payment_id": "pay_XYZ000",
                "razorpay_signature": signature
            }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "signature mismatch");
    }

    #[tokio::test]
    async fn test_verify_payment_rejects_malformed_callback() {
        let server = test_server();

        let response = server
            .post("/verify-payment")
            .json(&json!({
                "razorpay_order_id": "",
                "razorpay_payment_id": "pay_XYZ789",
                "razorpay_signature": "not-a-signature"
            }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "malformed callback input");
    }

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Test error", 400);
        assert_eq!(err.error, "Test error");
        assert_eq!(err.code, 400);
    }

    #[test]
    fn test_gateway_error_conversion() {
        let err = GatewayError::InvalidRequest("Bad data".to_string());
        let (status, _json) = gateway_error_to_response(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
