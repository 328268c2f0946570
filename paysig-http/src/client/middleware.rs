//! The payment header interceptor, implemented as reqwest middleware.

use http::Extensions;
use paysig::networks::{self, ChainId};
use reqwest::{Request, Response};
use reqwest_middleware as rqm;
use tracing::{trace, warn};

use crate::headers::{NormalizeOutcome, normalize_payment_header};

/// Middleware that rewrites the `X-PAYMENT` header's embedded signature
/// into legacy `{27, 28}` recovery form before the request is dispatched.
///
/// The normalizer is stateless and per-request work is fully independent;
/// concurrency, cancellation, and timeouts are whatever the wrapped client
/// provides. The response is returned to the caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XPaymentNormalizer {
    chain_id: ChainId,
}

impl XPaymentNormalizer {
    /// Creates a normalizer targeting Avalanche Fuji
    /// ([`networks::AVALANCHE_FUJI`]).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chain_id: networks::AVALANCHE_FUJI,
        }
    }

    /// Overrides the chain ID consulted when decoding EIP-155
    /// chain-replay-protected recovery values.
    #[must_use]
    pub const fn with_chain_id(mut self, chain_id: ChainId) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Returns the configured target chain ID.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }
}

impl Default for XPaymentNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl rqm::Middleware for XPaymentNormalizer {
    /// Rewrites the payment header, then hands the request to the next
    /// layer.
    ///
    /// Normalization failures degrade to forwarding the original request;
    /// only transport errors from the underlying client surface to the
    /// caller.
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: rqm::Next<'_>,
    ) -> rqm::Result<Response> {
        match normalize_payment_header(req.headers_mut(), self.chain_id) {
            NormalizeOutcome::Normalized => {
                trace!(url = %req.url(), "rewrote X-PAYMENT signature");
            }
            NormalizeOutcome::Skipped(reason) => {
                trace!(?reason, "X-PAYMENT left untouched");
            }
            NormalizeOutcome::Failed(err) => {
                warn!(%err, "failed to normalize X-PAYMENT header, sending request as-is");
            }
        }
        next.run(req, extensions).await
    }
}
