//! Error types for the HTTP payment header layer.

use paysig::{EnvelopeError, SignatureFormatError};

/// Errors that can occur while rewriting a payment header.
///
/// These never abort a request; the interceptor records them in a
/// [`NormalizeOutcome::Failed`](crate::headers::NormalizeOutcome::Failed)
/// and forwards the original request.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The header value could not be decoded into a payment envelope, or
    /// the rewritten envelope could not be re-encoded.
    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The envelope's signature field is malformed.
    #[error("signature error: {0}")]
    Signature(#[from] SignatureFormatError),

    /// The re-encoded header value cannot be represented in the header
    /// container.
    #[error("normalized value is not a legal header value")]
    InvalidHeaderValue,
}
