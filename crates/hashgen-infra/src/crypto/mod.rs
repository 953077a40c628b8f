//! Hash algorithms for the hash service.
//!
//! - `hash`: `Sha256PrefixHasher` (deterministic hex prefix) and
//!   `SaltedBase62Hasher` (salted, cached base62)

pub mod hash;

use hashgen_core::service::hash::HashAlgorithm;
use hashgen_types::hash::HashScheme;

/// Instantiate the algorithm for `scheme`.
pub fn algorithm_for(scheme: HashScheme) -> Box<dyn HashAlgorithm> {
    match scheme {
        HashScheme::Sha256Prefix => Box::new(hash::Sha256PrefixHasher::new()),
        HashScheme::SaltedBase62 => Box::new(hash::SaltedBase62Hasher::new()),
    }
}
