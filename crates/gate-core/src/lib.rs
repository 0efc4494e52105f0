//! # gate-core
//!
//! Core types and traits for the razor-gate payment gateway.
//!
//! This crate provides:
//! - `SignatureVerifier` for HMAC-SHA256 payment callback verification
//! - `PaymentProvider` trait for implementing payment providers
//! - `OrderRequest` and `ProviderOrder` for the order creation flow
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use gate_core::{OrderRequest, PaymentCallback, SignatureVerifier};
//!
//! // Build an order for 500.00 INR (amount in paise)
//! let request = OrderRequest::new(50_000);
//! let order = provider.create_order(&request).await?;
//!
//! // Verify the confirmation callback
//! let verifier = SignatureVerifier::new(secret);
//! let result = verifier.verify_callback(&callback);
//! if result.is_accepted() {
//!     // mark the payment confirmed
//! }
//! ```

pub mod error;
pub mod order;
pub mod provider;
pub mod signature;

// Re-exports for convenience
pub use error::{GatewayError, GatewayResult};
pub use order::{Currency, OrderRequest, ProviderOrder};
pub use provider::{BoxedPaymentProvider, PaymentProvider};
pub use signature::{
    compute_signature, PaymentCallback, RejectReason, SignatureVerifier, VerificationResult,
};
