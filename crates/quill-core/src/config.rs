//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/quill/config.toml)
//! 3. Environment variables (QUILL_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix
const ENV_PREFIX: &str = "QUILL";

fn default_page_size() -> usize {
    6
}

fn default_autosave_secs() -> u64 {
    30
}

fn default_seed_samples() -> bool {
    true
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display name stamped on created articles and drafts
    #[serde(default)]
    pub author_name: Option<String>,

    /// Avatar URL for the author; generated from the name when unset
    #[serde(default)]
    pub author_avatar: Option<String>,

    /// Articles per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Seconds between autosave ticks while editing
    #[serde(default = "default_autosave_secs")]
    pub autosave_secs: u64,

    /// Whether a fresh session starts with the showcase articles
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author_name: None,
            author_avatar: None,
            page_size: default_page_size(),
            autosave_secs: default_autosave_secs(),
            seed_samples: default_seed_samples(),
        }
    }
}

impl Config {
    /// Load configuration from the default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (QUILL_AUTHOR, QUILL_PAGE_SIZE, ...)
    /// 2. Config file (~/.config/quill/config.toml or QUILL_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    ///
    /// Environment variables are still applied as overrides.
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(format!("{}_AUTHOR", ENV_PREFIX)) {
            self.author_name = if val.is_empty() { None } else { Some(val) };
        }

        if let Ok(val) = std::env::var(format!("{}_AUTHOR_AVATAR", ENV_PREFIX)) {
            self.author_avatar = if val.is_empty() { None } else { Some(val) };
        }

        if let Ok(val) = std::env::var(format!("{}_PAGE_SIZE", ENV_PREFIX)) {
            if let Ok(size) = val.parse() {
                self.page_size = size;
            }
        }

        if let Ok(val) = std::env::var(format!("{}_AUTOSAVE_SECS", ENV_PREFIX)) {
            if let Ok(secs) = val.parse() {
                self.autosave_secs = secs;
            }
        }

        if let Ok(val) = std::env::var(format!("{}_SEED_SAMPLES", ENV_PREFIX)) {
            self.seed_samples = val.eq_ignore_ascii_case("true") || val == "1";
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Path to the config file
    ///
    /// QUILL_CONFIG overrides the default location.
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quill")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.author_name.is_none());
        assert_eq!(config.page_size, 6);
        assert_eq!(config.autosave_secs, 30);
        assert!(config.seed_samples);
    }

    #[test]
    fn test_load_from_str() {
        let config = Config::load_from_str(
            r#"
            author_name = "Jane Doe"
            page_size = 10
            seed_samples = false
            "#,
        )
        .unwrap();

        assert_eq!(config.author_name.as_deref(), Some("Jane Doe"));
        assert_eq!(config.page_size, 10);
        assert!(!config.seed_samples);
        // Unlisted keys keep their defaults
        assert_eq!(config.autosave_secs, 30);
    }

    #[test]
    fn test_env_overrides_file_value_on_load_from_str() {
        // The only test touching this variable; other config tests
        // read different keys, so parallel runs stay independent.
        std::env::set_var("QUILL_AUTHOR_AVATAR", "https://example.com/env.png");
        let config =
            Config::load_from_str("author_avatar = \"https://example.com/file.png\"\n").unwrap();
        std::env::remove_var("QUILL_AUTHOR_AVATAR");

        assert_eq!(
            config.author_avatar.as_deref(),
            Some("https://example.com/env.png")
        );
    }

    #[test]
    fn test_load_from_str_rejects_bad_toml() {
        assert!(Config::load_from_str("author_name = [not toml").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.page_size, 6);
    }

    #[test]
    fn test_load_from_path_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "autosave_secs = 5\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.autosave_secs, 5);
    }
}
