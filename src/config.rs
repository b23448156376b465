//! Configuration management for Axion
//!
//! Configuration lives in a JSON file under the platform configuration
//! directory. A missing file means defaults; every field is optional.

use crate::error::{ConfigError, ConfigResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "com.axion.Editor";

/// Name of the configuration file inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Display name given to documents created with "new"
pub const DEFAULT_UNTITLED_NAME: &str = "untitled.txt";

/// Content given to documents created with "new"
pub const DEFAULT_PLACEHOLDER_CONTENT: &str = "Not editable (Read only)";

/// Default tab title width before truncation
pub const DEFAULT_MAX_TAB_TITLE_CHARS: usize = 24;

/// Smallest accepted tab title width (room for one char plus the ellipsis)
pub const MIN_TAB_TITLE_CHARS: usize = 4;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document session configuration
    pub session: SessionConfig,

    /// Presentation configuration
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from the default location, or return defaults
    pub fn load() -> ConfigResult<Self> {
        let path = Self::config_dir()?.join(CONFIG_FILE_NAME);
        if !path.exists() {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::LoadError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_json_str(&content)
    }

    /// Parse and validate configuration from JSON text
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot constrain
    pub fn validate(&self) -> ConfigResult<()> {
        if self.session.untitled_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "session.untitled_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.ui.max_tab_title_chars < MIN_TAB_TITLE_CHARS {
            return Err(ConfigError::InvalidValue {
                key: "ui.max_tab_title_chars".to_string(),
                reason: format!("must be at least {}", MIN_TAB_TITLE_CHARS),
            });
        }

        Ok(())
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }
}

/// Document session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Display name for new documents
    pub untitled_name: String,

    /// Initial content for new documents
    pub placeholder_content: String,

    /// Start with the sample workspace open
    pub seed_sample: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            untitled_name: DEFAULT_UNTITLED_NAME.to_string(),
            placeholder_content: DEFAULT_PLACEHOLDER_CONTENT.to_string(),
            seed_sample: true,
        }
    }
}

/// Presentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tab titles longer than this are truncated with an ellipsis
    pub max_tab_title_chars: usize,

    /// Show the dirty dot on modified tabs
    pub show_modified_indicator: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_tab_title_chars: DEFAULT_MAX_TAB_TITLE_CHARS,
            show_modified_indicator: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.session.untitled_name, "untitled.txt");
        assert_eq!(
            config.session.placeholder_content,
            "Not editable (Read only)"
        );
        assert!(config.session.seed_sample);
        assert!(config.ui.show_modified_indicator);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "ui": { "max_tab_title_chars": 12 } }"#;
        let config = Config::from_json_str(json).unwrap();
        assert_eq!(config.ui.max_tab_title_chars, 12);
        assert!(config.ui.show_modified_indicator);
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_rejects_narrow_tabs() {
        let json = r#"{ "ui": { "max_tab_title_chars": 2 } }"#;
        match Config::from_json_str(json) {
            Err(ConfigError::InvalidValue { key, .. }) => {
                assert_eq!(key, "ui.max_tab_title_chars");
            }
            other => panic!("expected an invalid value error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_blank_untitled_name() {
        let json = r#"{ "session": { "untitled_name": "  " } }"#;
        let err = Config::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("axion-editor-missing-config-test.json");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError { .. }));
    }
}
