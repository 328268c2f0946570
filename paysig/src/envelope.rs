//! Base64/JSON payment envelope decoding and re-encoding.
//!
//! The `X-PAYMENT` header carries a base64-encoded JSON document. Apart
//! from the `payload.signature` field, the document's contents are opaque
//! to this crate and must survive a decode/re-encode cycle byte-for-byte,
//! so the envelope wraps the raw [`serde_json::Value`] instead of a typed
//! struct. Key order is kept by `serde_json`'s `preserve_order` feature.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as b64;
use serde_json::Value;

use crate::error::EnvelopeError;

/// A decoded payment envelope.
///
/// Lives for the duration of one normalization pass: decoded from a header
/// value, optionally rewritten via [`set_signature`](Self::set_signature),
/// re-encoded, and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentEnvelope(Value);

impl PaymentEnvelope {
    /// Decodes a base64-encoded JSON header value into an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError`] if the value is not valid base64 or does
    /// not decode to valid JSON.
    pub fn from_base64(header_value: &str) -> Result<Self, EnvelopeError> {
        let bytes = b64.decode(header_value.trim())?;
        Ok(Self(serde_json::from_slice(&bytes)?))
    }

    /// Returns the `payload.signature` string, if the envelope carries one.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.0.get("payload")?.get("signature")?.as_str()
    }

    /// Replaces the `payload.signature` field in place.
    ///
    /// Does nothing when the envelope has no such field; every other field
    /// is left untouched.
    pub fn set_signature(&mut self, signature: String) {
        if let Some(slot) = self
            .0
            .get_mut("payload")
            .and_then(|payload| payload.get_mut("signature"))
        {
            *slot = Value::String(signature);
        }
    }

    /// Re-encodes the envelope as a base64 JSON header value.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Json`] if serialization fails.
    pub fn to_base64(&self) -> Result<String, EnvelopeError> {
        let json = serde_json::to_vec(&self.0)?;
        Ok(b64.encode(&json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: &Value) -> String {
        b64.encode(value.to_string())
    }

    #[test]
    fn test_signature_lookup() {
        let envelope = PaymentEnvelope::from_base64(&encode(&json!({
            "payload": { "signature": "0xabc" }
        })))
        .unwrap();
        assert_eq!(envelope.signature(), Some("0xabc"));
    }

    #[test]
    fn test_missing_signature_is_none() {
        let envelope = PaymentEnvelope::from_base64(&encode(&json!({
            "payload": { "authorization": { "from": "0x1" } }
        })))
        .unwrap();
        assert_eq!(envelope.signature(), None);

        let envelope = PaymentEnvelope::from_base64(&encode(&json!({ "scheme": "exact" }))).unwrap();
        assert_eq!(envelope.signature(), None);
    }

    #[test]
    fn test_roundtrip_is_identity_without_mutation() {
        let original = encode(&json!({
            "x402Version": 1,
            "scheme": "exact",
            "payload": {
                "authorization": { "from": "0x1", "to": "0x2", "value": "1000" },
                "signature": "0xabc"
            }
        }));
        let envelope = PaymentEnvelope::from_base64(&original).unwrap();
        assert_eq!(envelope.to_base64().unwrap(), original);
    }

    #[test]
    fn test_set_signature_preserves_other_fields_and_order() {
        let original = json!({
            "x402Version": 1,
            "payload": {
                "authorization": { "nonce": "0xff" },
                "signature": "0xold",
                "extra": true
            },
            "scheme": "exact"
        });
        let mut envelope = PaymentEnvelope::from_base64(&encode(&original)).unwrap();
        envelope.set_signature("0xnew".to_string());

        let mut expected = original;
        expected["payload"]["signature"] = Value::String("0xnew".to_string());
        assert_eq!(envelope.to_base64().unwrap(), encode(&expected));
    }

    #[test]
    fn test_set_signature_without_field_is_noop() {
        let original = encode(&json!({ "payload": {} }));
        let mut envelope = PaymentEnvelope::from_base64(&original).unwrap();
        envelope.set_signature("0xnew".to_string());
        assert_eq!(envelope.to_base64().unwrap(), original);
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        assert!(matches!(
            PaymentEnvelope::from_base64("not base64!!"),
            Err(EnvelopeError::Base64(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let value = b64.encode("{ not json");
        assert!(matches!(
            PaymentEnvelope::from_base64(&value),
            Err(EnvelopeError::Json(_))
        ));
    }
}
