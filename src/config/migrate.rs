//! Configuration file upgrades: report and fill in keys added after the
//! file was first written.

use super::Config;
use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Every key a current configuration file is expected to carry.
pub const KNOWN_KEYS: [&str; 6] = [
    "api_base",
    "session_file",
    "page_size",
    "timeout_secs",
    "show_weekday",
    "color_cells",
];

/// Keys of `KNOWN_KEYS` absent from the YAML document.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let map = match yaml.as_mapping() {
        Some(m) => m,
        None => return Ok(KNOWN_KEYS.to_vec()),
    };

    Ok(KNOWN_KEYS
        .iter()
        .filter(|k| !map.contains_key(*k))
        .copied()
        .collect())
}

/// Rewrite the file with defaults for missing keys, keeping existing values.
/// Returns the keys that were added (empty when nothing changed).
pub fn migrate_file(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        Config::default().save_to(path)?;
        return Ok(KNOWN_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let missing = missing_keys(&content)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;
    tracing::info!(path = %path.display(), added = ?missing, "configuration migrated");
    Ok(missing)
}
