//! ECDSA recovery byte classification and normalization.
//!
//! A payment signature reaches this layer as a hex string: a `0x`-prefixed
//! 64-byte r‖s body followed by the recovery identifier. Signers encode
//! that identifier in one of three conventions:
//!
//! - **yParity**: `0` or `1`
//! - **legacy**: `27` or `28`
//! - **EIP-155 chain-replay-protected**: `chain_id * 2 + 35 + y_parity`
//!
//! The receiving network only accepts the legacy form, so
//! [`normalize_signature`] rewrites the recovery suffix into `{27, 28}`
//! while leaving r‖s untouched.

use tracing::warn;

use crate::error::SignatureFormatError;
use crate::networks::ChainId;

/// Offset of the recovery suffix within a hex-encoded signature.
///
/// Covers the `0x` prefix plus 128 hex characters of r‖s. The slicing
/// offset is fixed; inputs produced by a signer that omits the prefix are
/// malformed here and must be rejected by the caller.
pub const RECOVERY_OFFSET: usize = 130;

/// Classification of a recovery identifier by numeric range.
///
/// The ranges are disjoint but leave gaps (`2..=26` and `29..=34`); values
/// falling in a gap classify as [`Unrecognized`](Self::Unrecognized) and
/// are passed through unchanged rather than rejected, since no upstream
/// convention assigns them a meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryForm {
    /// Raw yParity form: `0` or `1`.
    YParity,
    /// Legacy form: `27` or `28`.
    Legacy,
    /// EIP-155 chain-replay-protected form: `chain_id * 2 + 35 + y_parity`.
    Eip155,
    /// A value outside every known convention.
    Unrecognized,
}

impl RecoveryForm {
    /// Classifies a recovery value.
    ///
    /// The `{0, 1}` and `{27, 28}` checks run before the `>= 35` check so
    /// the exact small values are never misread as chain-protected.
    #[must_use]
    pub const fn classify(v: u64) -> Self {
        match v {
            0 | 1 => Self::YParity,
            27 | 28 => Self::Legacy,
            v if v >= 35 => Self::Eip155,
            _ => Self::Unrecognized,
        }
    }
}

/// Rewrites a signature's recovery suffix into legacy `{27, 28}` form.
///
/// The first [`RECOVERY_OFFSET`] characters (the `0x`-prefixed r‖s body)
/// are returned byte-for-byte; only the trailing recovery component
/// changes. `chain_id` is consulted only when the input carries an EIP-155
/// chain-protected value. Unrecognized values are passed through with a
/// warning rather than failing the whole operation.
///
/// # Errors
///
/// Returns [`SignatureFormatError::TooShort`] if the input does not extend
/// past the r‖s prefix, or [`SignatureFormatError::InvalidRecoverySuffix`]
/// if the suffix is not valid hex.
pub fn normalize_signature(
    signature: &str,
    chain_id: ChainId,
) -> Result<String, SignatureFormatError> {
    let (prefix, v_hex) = signature
        .split_at_checked(RECOVERY_OFFSET)
        .filter(|(_, suffix)| !suffix.is_empty())
        .ok_or(SignatureFormatError::TooShort {
            len: signature.len(),
        })?;

    let v = u64::from_str_radix(v_hex, 16).map_err(|_| {
        SignatureFormatError::InvalidRecoverySuffix {
            found: v_hex.to_string(),
        }
    })?;

    let normalized = match RecoveryForm::classify(v) {
        RecoveryForm::YParity => v + 27,
        RecoveryForm::Legacy => v,
        RecoveryForm::Eip155 => {
            // Wrapping subtraction keeps the parity correct even when the
            // embedded chain ID disagrees with the configured one.
            let y_parity = v.wrapping_sub(35).wrapping_sub(chain_id.wrapping_mul(2)) % 2;
            27 + y_parity
        }
        RecoveryForm::Unrecognized => {
            warn!(v, "unrecognized recovery value, passing through unchanged");
            v
        }
    };

    Ok(format!("{prefix}{normalized:02x}"))
}
