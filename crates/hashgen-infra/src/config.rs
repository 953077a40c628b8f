//! Configuration loader for hashgen.
//!
//! Reads `config.toml` and deserializes it into [`HashgenConfig`]. Falls back
//! to defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use hashgen_types::config::HashgenConfig;

/// Resolve the directory holding `config.toml`.
///
/// Priority:
/// 1. `HASHGEN_HOME` environment variable
/// 2. `~/.hashgen`
/// 3. `.hashgen` in the current directory
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HASHGEN_HOME") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".hashgen");
    }

    PathBuf::from(".hashgen")
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    resolve_config_dir().join("config.toml")
}

/// Load configuration from `path`.
///
/// - Missing file: returns [`HashgenConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_config(path: &Path) -> HashgenConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return HashgenConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return HashgenConfig::default();
        }
    };

    match toml::from_str::<HashgenConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            HashgenConfig::default()
        }
    }
}
