//! # gate-razorpay
//!
//! Razorpay payment provider for razor-gate-rs.
//!
//! This crate covers the two halves of the Razorpay flow:
//!
//! 1. **Order creation** - `POST /v1/orders` with basic auth; the returned
//!    order object is forwarded opaquely to the storefront, which hands it
//!    to Razorpay Checkout in the browser.
//!
//! 2. **Payment verification** - after checkout, Razorpay posts back
//!    `(order_id, payment_id, signature)`; the signature is the HMAC-SHA256
//!    of `"{order_id}|{payment_id}"` keyed by the API secret and is checked
//!    with the constant-time verifier from `gate-core`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gate_razorpay::RazorpayProvider;
//! use gate_core::{OrderRequest, PaymentProvider};
//!
//! // Create provider from environment (RAZORPAY_KEY_ID / RAZORPAY_KEY_SECRET)
//! let provider = RazorpayProvider::from_env()?;
//!
//! // Create an order for 500.00 INR
//! let order = provider.create_order(&OrderRequest::new(50_000)).await?;
//!
//! // Later, verify the confirmation callback
//! let result = provider.verify_payment(&callback);
//! ```

pub mod config;
pub mod orders;

// Re-exports
pub use config::RazorpayConfig;
pub use orders::RazorpayProvider;
