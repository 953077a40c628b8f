//! Shared domain types for hashgen.
//!
//! Wire types for the hash endpoint, the error enums used by the client and
//! the service, and configuration. Zero infrastructure dependencies.

pub mod config;
pub mod error;
pub mod hash;
