//! Hash generation service used by the HTTP server.
//!
//! `HashService` validates the input and delegates to a [`HashAlgorithm`].
//! The algorithms themselves live in hashgen-infra.

use hashgen_types::error::HashError;
use hashgen_types::hash::HashResult;

use crate::validate::is_alphanumeric;

/// Abstraction over the algorithm that turns an input into a hash string.
pub trait HashAlgorithm: Send + Sync {
    /// Short identifier for logs (e.g. "sha256-prefix").
    fn name(&self) -> &str;

    /// Compute the hash for a validated, non-empty alphanumeric input.
    fn generate(&self, input: &str) -> Result<String, HashError>;
}

pub struct HashService {
    algorithm: Box<dyn HashAlgorithm>,
}

impl HashService {
    pub fn new(algorithm: Box<dyn HashAlgorithm>) -> Self {
        Self { algorithm }
    }

    pub fn algorithm_name(&self) -> &str {
        self.algorithm.name()
    }

    /// Validate `input` and hash it.
    pub fn generate(&self, input: &str) -> Result<HashResult, HashError> {
        if input.is_empty() {
            return Err(HashError::InputRequired);
        }
        if !is_alphanumeric(input) {
            return Err(HashError::NotAlphanumeric);
        }

        let hash = self.algorithm.generate(input)?;
        tracing::debug!(
            algorithm = self.algorithm.name(),
            input_len = input.len(),
            "generated hash"
        );

        Ok(HashResult {
            input: input.to_string(),
            hash,
        })
    }
}
