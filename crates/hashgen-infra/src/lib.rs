//! Infrastructure layer for hashgen.
//!
//! Contains implementations of the ports defined in `hashgen-core`: the
//! reqwest-backed hash client, the hash algorithms used by the service, and
//! the TOML configuration loader.

pub mod client;
pub mod config;
pub mod crypto;
