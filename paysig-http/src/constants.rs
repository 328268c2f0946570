//! HTTP header names for the payment credential.

/// Header carrying the base64-encoded payment envelope (client → server).
///
/// Accepted in any letter-casing on read; always written back under this
/// canonical casing.
pub const X_PAYMENT_HEADER: &str = "X-PAYMENT";
