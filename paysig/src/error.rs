//! Error types for signature and envelope handling.

/// Errors from parsing a hex-encoded payment signature.
#[derive(Debug, thiserror::Error)]
pub enum SignatureFormatError {
    /// The signature string is shorter than the fixed r‖s prefix plus a
    /// recovery suffix of at least one hex character.
    #[error("signature too short: {len} characters, need more than 130")]
    TooShort {
        /// Length of the offending input, in characters.
        len: usize,
    },

    /// The recovery suffix after the r‖s prefix is not valid hex.
    #[error("invalid recovery suffix {found:?}")]
    InvalidRecoverySuffix {
        /// The suffix that failed to parse.
        found: String,
    },
}

/// Errors from decoding or re-encoding a payment envelope.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// Base64 decoding of the header value failed.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
