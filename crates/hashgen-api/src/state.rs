//! Application state for the HTTP service.
//!
//! AppState pins the hash service to the algorithm selected at startup.

use std::sync::Arc;

use hashgen_core::service::hash::HashService;
use hashgen_infra::crypto::algorithm_for;
use hashgen_types::hash::HashScheme;

/// Shared state handed to every REST handler.
#[derive(Clone)]
pub struct AppState {
    pub hash_service: Arc<HashService>,
}

impl AppState {
    pub fn new(scheme: HashScheme) -> Self {
        Self {
            hash_service: Arc::new(HashService::new(algorithm_for(scheme))),
        }
    }
}
