//! # Payment Provider Trait
//!
//! Seam between the HTTP layer and concrete payment providers.
//!
//! The gateway talks to exactly one provider at a time, chosen at startup and
//! injected as an `Arc<dyn PaymentProvider>` into the application state. The
//! provider value owns its configuration; there is no ambient global client.

use crate::error::GatewayResult;
use crate::order::{OrderRequest, ProviderOrder};
use crate::signature::{PaymentCallback, VerificationResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait implemented by payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create an order with the provider.
    ///
    /// # Arguments
    /// * `request` - Validated order request (amount in minor units)
    ///
    /// # Returns
    /// The provider's order object, forwarded opaquely to the caller.
    async fn create_order(&self, request: &OrderRequest) -> GatewayResult<ProviderOrder>;

    /// Verify a payment confirmation callback.
    ///
    /// Synchronous and pure: rejection is a routine outcome reported in the
    /// result, never an error.
    fn verify_payment(&self, callback: &PaymentCallback) -> VerificationResult;

    /// Get the provider name (for logging and response bodies).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment provider (dynamic dispatch)
pub type BoxedPaymentProvider = Arc<dyn PaymentProvider>;
