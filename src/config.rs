//! Configuration file support for bomsource.
//!
//! Provides TOML-based configuration through `bomsource.toml` files,
//! including data structures, file loading, and validation. The only
//! secret carried here is the Mouser API key; the key is opaque
//! configuration as far as the sourcing core is concerned.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "bomsource.toml";

/// Environment variable overriding the configured API key
const MOUSER_KEY_ENV: &str = "MOUSER_API_KEY";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub mouser_api_key: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Resolve the Mouser API key: the environment variable wins over the
/// config file, blank values count as absent. An absent key is not an
/// error - the Mouser adapter short-circuits to "unavailable" instead.
pub fn resolve_mouser_api_key(config: Option<&ConfigFile>) -> Option<String> {
    let from_env = std::env::var(MOUSER_KEY_ENV).ok();
    from_env
        .or_else(|| config.and_then(|c| c.mouser_api_key.clone()))
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
