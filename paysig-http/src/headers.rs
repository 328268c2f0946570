//! Case-insensitive header access and the payment-header rewrite routine.
//!
//! Requests reach the interceptor with headers in one of two container
//! shapes: a typed [`http::HeaderMap`], or a plain string map assembled by
//! hand before a request is built. [`HeaderCarrier`] gives the rewrite
//! routine one view over both: case-insensitive lookup, canonical-cased
//! insert that displaces variant-cased occurrences, and case-insensitive
//! removal.

use std::collections::HashMap;

use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use paysig::{ChainId, PaymentEnvelope, normalize_signature};

use crate::constants::X_PAYMENT_HEADER;
use crate::error::HttpError;

/// Minimal capability set the rewrite routine needs from a header
/// container.
pub trait HeaderCarrier {
    /// Looks up a header by case-insensitive name, returning its value as
    /// text. Values that are not valid UTF-8 read as absent.
    fn get_text(&self, name: &str) -> Option<String>;

    /// Writes a header under the given canonical casing, removing any
    /// variant-cased occurrence of the same name first.
    ///
    /// Returns `false` (leaving the container unmodified) if the value
    /// cannot be represented in this container.
    fn set_text(&mut self, name: &'static str, value: &str) -> bool;

    /// Removes all occurrences of a header by case-insensitive name.
    fn remove(&mut self, name: &str);
}

/// Typed header collection. [`HeaderMap`] normalizes name casing and
/// deduplicates on insert by construction.
impl HeaderCarrier for HeaderMap {
    fn get_text(&self, name: &str) -> Option<String> {
        self.get(name)?.to_str().ok().map(str::to_owned)
    }

    fn set_text(&mut self, name: &'static str, value: &str) -> bool {
        let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
            return false;
        };
        let Ok(value) = HeaderValue::from_str(value) else {
            return false;
        };
        self.insert(name, value);
        true
    }

    fn remove(&mut self, name: &str) {
        self.remove(name);
    }
}

/// Plain key-value mapping, as assembled by hand before building a
/// request.
impl HeaderCarrier for HashMap<String, String> {
    fn get_text(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
    }

    fn set_text(&mut self, name: &'static str, value: &str) -> bool {
        self.retain(|key, _| !key.eq_ignore_ascii_case(name));
        self.insert(name.to_string(), value.to_string());
        true
    }

    fn remove(&mut self, name: &str) {
        self.retain(|key, _| !key.eq_ignore_ascii_case(name));
    }
}

/// Why a normalization pass left the headers untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The request carries no `X-PAYMENT` header.
    MissingHeader,
    /// The envelope decoded but has no `payload.signature` field.
    MissingSignature,
}

/// Result of one payment-header normalization pass.
///
/// Every variant means the request proceeds; the variants only record
/// whether the header was rewritten, skipped, or left as-is after a
/// failure.
#[derive(Debug)]
pub enum NormalizeOutcome {
    /// The envelope decoded and its signature was rewritten in place.
    Normalized,
    /// Nothing to normalize; headers untouched.
    Skipped(SkipReason),
    /// Decoding or rewriting failed; the original header value was kept.
    Failed(HttpError),
}

/// Rewrites the `X-PAYMENT` header's embedded signature into legacy
/// recovery form.
///
/// The header is looked up case-insensitively and, when rewritten, stored
/// back under the canonical `X-PAYMENT` casing with any variant-cased
/// occurrence removed. Failures never propagate: the outcome records them
/// and the container is left with its original header value.
pub fn normalize_payment_header<H: HeaderCarrier>(
    headers: &mut H,
    chain_id: ChainId,
) -> NormalizeOutcome {
    let Some(raw) = headers.get_text(X_PAYMENT_HEADER) else {
        return NormalizeOutcome::Skipped(SkipReason::MissingHeader);
    };

    let mut envelope = match PaymentEnvelope::from_base64(&raw) {
        Ok(envelope) => envelope,
        Err(err) => return NormalizeOutcome::Failed(err.into()),
    };

    let Some(signature) = envelope.signature() else {
        return NormalizeOutcome::Skipped(SkipReason::MissingSignature);
    };

    let normalized = match normalize_signature(signature, chain_id) {
        Ok(normalized) => normalized,
        Err(err) => return NormalizeOutcome::Failed(err.into()),
    };
    envelope.set_signature(normalized);

    let encoded = match envelope.to_base64() {
        Ok(encoded) => encoded,
        Err(err) => return NormalizeOutcome::Failed(err.into()),
    };
    if !headers.set_text(X_PAYMENT_HEADER, &encoded) {
        return NormalizeOutcome::Failed(HttpError::InvalidHeaderValue);
    }
    NormalizeOutcome::Normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as b64;
    use paysig::networks::AVALANCHE_FUJI;
    use serde_json::json;

    fn envelope_with_v(v_hex: &str) -> String {
        let signature = format!("0x{}{}", "ab".repeat(64), v_hex);
        b64.encode(json!({ "payload": { "signature": signature } }).to_string())
    }

    fn decoded_signature(header_value: &str) -> String {
        let envelope = PaymentEnvelope::from_base64(header_value).unwrap();
        envelope.signature().unwrap().to_string()
    }

    #[test]
    fn test_missing_header_is_skipped() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let before = headers.clone();

        let outcome = normalize_payment_header(&mut headers, AVALANCHE_FUJI);
        assert!(matches!(
            outcome,
            NormalizeOutcome::Skipped(SkipReason::MissingHeader)
        ));
        assert_eq!(headers, before);
    }

    #[test]
    fn test_missing_signature_is_skipped() {
        let value = b64.encode(json!({ "payload": { "authorization": {} } }).to_string());
        let mut headers = HeaderMap::new();
        headers.insert("x-payment", HeaderValue::from_str(&value).unwrap());

        let outcome = normalize_payment_header(&mut headers, AVALANCHE_FUJI);
        assert!(matches!(
            outcome,
            NormalizeOutcome::Skipped(SkipReason::MissingSignature)
        ));
        assert_eq!(headers.get_text("X-PAYMENT"), Some(value));
    }

    #[test]
    fn test_invalid_value_keeps_original_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-payment", HeaderValue::from_static("%%not-base64%%"));

        let outcome = normalize_payment_header(&mut headers, AVALANCHE_FUJI);
        assert!(matches!(outcome, NormalizeOutcome::Failed(_)));
        assert_eq!(
            headers.get_text(X_PAYMENT_HEADER),
            Some("%%not-base64%%".to_string())
        );
    }

    #[test]
    fn test_header_map_rewrite() {
        let mut headers = HeaderMap::new();
        headers.insert("x-payment", HeaderValue::from_str(&envelope_with_v("00")).unwrap());

        let outcome = normalize_payment_header(&mut headers, AVALANCHE_FUJI);
        assert!(matches!(outcome, NormalizeOutcome::Normalized));

        let rewritten = headers.get_text(X_PAYMENT_HEADER).unwrap();
        assert!(decoded_signature(&rewritten).ends_with("1b"));
    }

    #[test]
    fn test_plain_map_variant_casing_is_replaced() {
        let mut headers = HashMap::new();
        headers.insert("x-PaYmEnT".to_string(), envelope_with_v("150f6"));
        headers.insert("Accept".to_string(), "*/*".to_string());

        let outcome = normalize_payment_header(&mut headers, AVALANCHE_FUJI);
        assert!(matches!(outcome, NormalizeOutcome::Normalized));

        // Exactly one canonical-cased key remains.
        assert!(!headers.contains_key("x-PaYmEnT"));
        let rewritten = headers.get("X-PAYMENT").unwrap();
        assert!(decoded_signature(rewritten).ends_with("1c"));
        assert_eq!(headers.get("Accept"), Some(&"*/*".to_string()));
    }

    #[test]
    fn test_plain_map_lookup_and_remove_are_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("X-Payment".to_string(), "abc".to_string());
        assert_eq!(headers.get_text("x-payment"), Some("abc".to_string()));

        HeaderCarrier::remove(&mut headers, "x-PAYMENT");
        assert!(headers.is_empty());
    }

    #[test]
    fn test_rewrite_preserves_sibling_fields() {
        let original = json!({
            "x402Version": 1,
            "payload": {
                "authorization": { "from": "0x1", "nonce": "0xff" },
                "signature": format!("0x{}{}", "cd".repeat(64), "01")
            },
            "scheme": "exact"
        });
        let mut headers = HashMap::new();
        headers.insert(
            "X-PAYMENT".to_string(),
            b64.encode(original.to_string()),
        );

        let outcome = normalize_payment_header(&mut headers, AVALANCHE_FUJI);
        assert!(matches!(outcome, NormalizeOutcome::Normalized));

        let mut expected = original;
        expected["payload"]["signature"] =
            json!(format!("0x{}{}", "cd".repeat(64), "1c"));
        assert_eq!(
            headers.get("X-PAYMENT"),
            Some(&b64.encode(expected.to_string()))
        );
    }
}
