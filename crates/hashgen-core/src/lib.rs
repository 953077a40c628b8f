//! Business logic and port definitions for hashgen.
//!
//! This crate defines the ports (`HashClient`, `HashAlgorithm`) that the
//! infrastructure layer implements, the form controller that drives a
//! `HashClient`, and the hash service used by the HTTP server. It depends
//! only on `hashgen-types`, never on `hashgen-infra` or any IO crate.

pub mod client;
pub mod form;
pub mod service;
pub mod validate;
