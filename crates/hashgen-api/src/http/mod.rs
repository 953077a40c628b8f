//! HTTP API layer for the hash service.
//!
//! Axum routes at `/api/hash` and `/api/health` with a flat JSON error
//! format and CORS support.

pub mod error;
pub mod handlers;
pub mod router;
