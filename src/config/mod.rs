use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Environment override for the configuration directory (tests, portable installs).
pub const ENV_CONFIG_DIR: &str = "RTRACKER_CONFIG_DIR";
/// Environment override for the API base URL.
pub const ENV_API: &str = "RTRACKER_API";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_true")]
    pub show_weekday: bool,
    #[serde(default = "default_true")]
    pub color_cells: bool,
}

fn default_api_base() -> String {
    "http://localhost:8080/api/v1".to_string()
}
fn default_session_file() -> String {
    Config::config_dir()
        .join("session.json")
        .to_string_lossy()
        .to_string()
}
fn default_page_size() -> u32 {
    10000
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            session_file: default_session_file(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
            show_weekday: true,
            color_cells: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(ENV_CONFIG_DIR)
            && !dir.trim().is_empty()
        {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|d| d.join("rtracker"))
            .unwrap_or_else(|| PathBuf::from(".rtracker"))
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtracker.conf")
    }

    /// Load configuration from the standard file, or defaults if not found.
    /// `RTRACKER_API` takes precedence over the file.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::config_file())?;
        if let Ok(api) = env::var(ENV_API)
            && !api.trim().is_empty()
        {
            cfg.api_base = api;
        }
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// API base without a trailing slash.
    pub fn api_root(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_file_takes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rtracker.conf");
        fs::write(&path, "api_base: http://example.test/api/\npage_size: 50\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.api_root(), "http://example.test/api");
        assert_eq!(cfg.page_size, 50);
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.show_weekday);
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.conf")).unwrap();
        assert_eq!(cfg.api_base, "http://localhost:8080/api/v1");
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rtracker.conf");
        fs::write(&path, "page_size: [not a number\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }
}
