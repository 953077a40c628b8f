//! Configuration types for hashgen.
//!
//! `HashgenConfig` mirrors `config.toml`. Every field has a default, so an
//! empty file (or no file at all) yields a working client and server.

use serde::{Deserialize, Serialize};

use crate::hash::HashScheme;

/// Base URL the form talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashgenConfig {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Settings for the form's request client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the hash service (without the `/api/hash` path).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional per-request timeout. Unset means requests may hang forever.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

/// Settings for `hashgen serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub scheme: HashScheme,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            scheme: HashScheme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = HashgenConfig::default();
        assert_eq!(config.client.base_url, "http://localhost:8080");
        assert!(config.client.request_timeout_secs.is_none());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.scheme, HashScheme::Sha256Prefix);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: HashgenConfig = toml::from_str("").unwrap();
        assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_config_deserialize_with_values() {
        let toml_str = r#"
[client]
base_url = "http://hash.internal:9000"
request_timeout_secs = 15

[server]
port = 9000
scheme = "salted-base62"
"#;
        let config: HashgenConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.client.base_url, "http://hash.internal:9000");
        assert_eq!(config.client.request_timeout_secs, Some(15));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.scheme, HashScheme::SaltedBase62);
    }
}
