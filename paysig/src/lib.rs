//! Core types for payment signature normalization.
//!
//! Externally-produced ECDSA payment signatures arrive with their recovery
//! identifier in one of several encoding conventions. The network this
//! workspace targets expects the legacy `{27, 28}` form, so this crate
//! provides the byte-level transform that rewrites a signature's recovery
//! component into that form, plus the envelope type that carries such a
//! signature inside an HTTP header.
//!
//! # Modules
//!
//! - [`envelope`] - Base64/JSON payment envelope decoding and re-encoding
//! - [`error`] - Error types for signature and envelope handling
//! - [`networks`] - Numeric chain identifiers for known EVM networks
//! - [`signature`] - Recovery byte classification and normalization
//!
//! The HTTP request interception built on top of these types lives in the
//! `paysig-http` crate.

pub mod envelope;
pub mod error;
pub mod networks;
pub mod signature;

pub use envelope::PaymentEnvelope;
pub use error::{EnvelopeError, SignatureFormatError};
pub use networks::ChainId;
pub use signature::{RecoveryForm, normalize_signature};
