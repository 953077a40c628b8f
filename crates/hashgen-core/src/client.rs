//! HashClient trait definition.
//!
//! The form controller talks to the hash service only through this port.
//! The reqwest-backed `HttpHashClient` lives in hashgen-infra; tests use
//! in-memory mocks.

use std::future::Future;

use hashgen_types::error::RequestError;
use hashgen_types::hash::HashResult;

/// A backend that turns an input string into a [`HashResult`].
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). One call is
/// one request: implementations must not retry.
pub trait HashClient: Send + Sync {
    /// Request a hash for `input` (already trimmed and validated).
    fn generate_hash(
        &self,
        input: &str,
    ) -> impl Future<Output = Result<HashResult, RequestError>> + Send;
}
