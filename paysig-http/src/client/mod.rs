//! Reqwest middleware that normalizes the `X-PAYMENT` header on outgoing
//! requests.
//!
//! Attach an [`XPaymentNormalizer`] to a client and every request that
//! carries a payment envelope has its embedded signature rewritten into
//! legacy recovery form before dispatch:
//!
//! ```no_run
//! use paysig_http::client::{ReqwestWithNormalization, XPaymentNormalizer};
//!
//! let client = reqwest::Client::new()
//!     .with_payment_normalization(XPaymentNormalizer::new());
//! ```
//!
//! Requests without the header pass through untouched, and a header that
//! fails to decode is sent as-is; the middleware never fails a request on
//! its own.

mod middleware;

pub use middleware::XPaymentNormalizer;

use reqwest::{Client, ClientBuilder};
use reqwest_middleware as rqm;

/// Trait for attaching payment-header normalization to reqwest clients.
pub trait ReqwestWithNormalization {
    /// The middleware-wrapped client type produced.
    type Output;

    /// Wraps the client so every request passes through `normalizer`
    /// before dispatch.
    fn with_payment_normalization(self, normalizer: XPaymentNormalizer) -> Self::Output;
}

impl ReqwestWithNormalization for Client {
    type Output = rqm::ClientWithMiddleware;

    fn with_payment_normalization(self, normalizer: XPaymentNormalizer) -> Self::Output {
        rqm::ClientBuilder::new(self).with(normalizer).build()
    }
}

impl ReqwestWithNormalization for ClientBuilder {
    type Output = Result<rqm::ClientWithMiddleware, reqwest::Error>;

    fn with_payment_normalization(self, normalizer: XPaymentNormalizer) -> Self::Output {
        let client = self.build()?;
        Ok(rqm::ClientBuilder::new(client).with(normalizer).build())
    }
}
