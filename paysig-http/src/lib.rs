//! HTTP payment header interception for signature normalization.
//!
//! Outgoing requests may carry a payment credential in the `X-PAYMENT`
//! header: a base64-encoded JSON envelope whose `payload.signature` field
//! holds an ECDSA signature. This crate rewrites that signature's recovery
//! component into the legacy `{27, 28}` form before the request leaves the
//! client, as a drop-in `reqwest` middleware.
//!
//! Normalization is a best-effort compatibility shim, not a gate on
//! delivery: any decode or rewrite failure degrades to sending the
//! original request with its header untouched.
//!
//! # Modules
//!
//! - [`client`] - The [`XPaymentNormalizer`] reqwest middleware
//! - [`constants`] - HTTP header names
//! - [`error`] - HTTP-layer error types
//! - [`headers`] - Case-insensitive header access and the rewrite routine

pub mod client;
pub mod constants;
pub mod error;
pub mod headers;

pub use client::{ReqwestWithNormalization, XPaymentNormalizer};
pub use error::HttpError;
pub use headers::{HeaderCarrier, NormalizeOutcome, SkipReason, normalize_payment_header};
