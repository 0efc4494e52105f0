//! # Payment Signature Verification
//!
//! HMAC-SHA256 verification of payment confirmation callbacks.
//!
//! After a customer completes payment, the provider posts back the order id,
//! the payment id, and a signature: the lowercase-hex HMAC-SHA256 digest of
//! `"{order_id}|{payment_id}"` keyed by the shared API secret. Verifying
//! that digest is the only proof that the callback came from a holder of the
//! secret and was not tampered with.
//!
//! The canonical message construction (ids joined by a literal `|`) is part
//! of the provider contract. Changing it invalidates every signature the
//! provider has ever issued, so it lives in exactly one place here.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Hex length of a SHA-256 digest
const SIGNATURE_HEX_LEN: usize = 64;

/// Fields of an inbound payment confirmation callback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCallback {
    /// Provider-assigned order ID
    pub order_id: String,

    /// Provider-assigned payment ID
    pub payment_id: String,

    /// Hex-encoded HMAC-SHA256 signature supplied by the provider
    pub signature: String,
}

impl PaymentCallback {
    pub fn new(
        order_id: impl Into<String>,
        payment_id: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            payment_id: payment_id.into(),
            signature: signature.into(),
        }
    }
}

/// Why a callback was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Structural problem with the callback fields, detected before any
    /// cryptographic work (empty id, non-hex or wrong-length signature)
    MalformedInput,
    /// Well-formed input whose digest does not match
    SignatureMismatch,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::MalformedInput => write!(f, "malformed callback input"),
            RejectReason::SignatureMismatch => write!(f, "signature mismatch"),
        }
    }
}

/// Outcome of verifying a payment callback.
///
/// A mismatch is a routine outcome (tampering, provider error), never a
/// program fault, so it is reported as a value rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationResult {
    Accepted,
    Rejected(RejectReason),
}

impl VerificationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, VerificationResult::Accepted)
    }
}

/// Verifies payment callback signatures against a shared secret.
///
/// Pure and stateless per call: safe to share across any number of request
/// tasks. The secret is captured once at construction and never mutated.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: Vec<u8>,
}

impl SignatureVerifier {
    /// Create a verifier keyed by the shared API secret
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Verify a callback signature.
    ///
    /// Returns `Rejected(MalformedInput)` without touching the HMAC when
    /// either id is empty or the signature is not 64 lowercase-hex chars,
    /// and `Rejected(SignatureMismatch)` when the digest does not match.
    pub fn verify(
        &self,
        order_id: &str,
        payment_id: &str,
        provided_signature: &str,
    ) -> VerificationResult {
        if order_id.is_empty() || payment_id.is_empty() {
            return VerificationResult::Rejected(RejectReason::MalformedInput);
        }

        if provided_signature.len() != SIGNATURE_HEX_LEN {
            return VerificationResult::Rejected(RejectReason::MalformedInput);
        }

        let provided: Vec<u8> = match hex::decode(provided_signature) {
            Ok(bytes) => bytes,
            Err(_) => return VerificationResult::Rejected(RejectReason::MalformedInput),
        };

        let digest = hmac_digest(&self.secret, &canonical_message(order_id, payment_id));

        if constant_time_eq(&digest, &provided) {
            VerificationResult::Accepted
        } else {
            VerificationResult::Rejected(RejectReason::SignatureMismatch)
        }
    }

    /// Verify the fields of a parsed callback
    pub fn verify_callback(&self, callback: &PaymentCallback) -> VerificationResult {
        self.verify(
            &callback.order_id,
            &callback.payment_id,
            &callback.signature,
        )
    }
}

// Key material must never reach logs or error output.
impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("secret", &"[redacted]")
            .finish()
    }
}

/// Compute the expected lowercase-hex signature for an order/payment pair.
///
/// Counterpart of [`SignatureVerifier::verify`]; used by tests and tooling.
pub fn compute_signature(secret: &[u8], order_id: &str, payment_id: &str) -> String {
    hex::encode(hmac_digest(secret, &canonical_message(order_id, payment_id)))
}

fn canonical_message(order_id: &str, payment_id: &str) -> String {
    format!("{order_id}|{payment_id}")
}

fn hmac_digest(secret: &[u8], message: &str) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Compare two digests without short-circuiting on the first differing byte.
///
/// The length check up front is not a timing leak: digest length is public.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
