//! HTTP request handlers for the hash service.

pub mod hash;
pub mod health;
