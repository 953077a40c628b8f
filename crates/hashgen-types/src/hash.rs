//! Wire types for the `/api/hash` endpoint.
//!
//! Shared by the form client (which sends `HashRequest` and reads back
//! `HashResult`) and the hash service (which does the opposite).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/hash`.
///
/// A missing `input` field decodes as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRequest {
    #[serde(default)]
    pub input: String,
}

impl HashRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A generated hash paired with the input it was generated from.
///
/// Returned by the service on success. The client does not validate the
/// shape beyond JSON decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    pub input: String,
    pub hash: String,
}

/// Error body returned by the service on non-2xx responses.
///
/// `error` is optional on the read side: any JSON object is tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

/// Hash algorithm used by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashScheme {
    /// First 10 hex characters of SHA-256(input). Deterministic.
    #[default]
    Sha256Prefix,
    /// Salted SHA-256 encoded as 10 base62 characters, cached per input.
    SaltedBase62,
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashScheme::Sha256Prefix => write!(f, "sha256-prefix"),
            HashScheme::SaltedBase62 => write!(f, "salted-base62"),
        }
    }
}

impl FromStr for HashScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha256-prefix" => Ok(HashScheme::Sha256Prefix),
            "salted-base62" => Ok(HashScheme::SaltedBase62),
            other => Err(format!("invalid hash scheme: '{other}'")),
        }
    }
}
