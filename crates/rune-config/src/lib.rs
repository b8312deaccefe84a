//! Rune Edit configuration system
//!
//! This crate provides centralized configuration for the text input widget,
//! loading settings from `rune-edit.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "rune-edit.toml";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure for Rune Edit
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EditConfig {
    /// Caret appearance and blinking
    pub caret: CaretConfig,
    /// Selection highlight
    pub selection: SelectionConfig,
    /// Font and masking
    pub text: TextConfig,
    /// Input box geometry
    pub input: InputConfig,
}

/// Caret configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaretConfig {
    /// Seconds between caret visibility toggles
    pub blink_interval: f32,
    /// Caret width in device pixels
    pub width: f32,
}

/// Selection highlight configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Highlight color as RGBA bytes (alpha is taken from `alpha`)
    pub color: [u8; 4],
    /// Highlight translucency in 0.0..=1.0
    pub alpha: f32,
}

/// Text configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Path to a font file (.ttf/.otf); monospace measurement when unset
    pub font: Option<PathBuf>,
    /// Font size in pixels per em
    pub font_size: f32,
    /// Advance per character when measuring without a font
    pub monospace_advance: f32,
    /// Substitution character for password-style masking
    pub mask: Option<char>,
}

/// Per-side padding in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaddingConfig {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Input box geometry configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Content width in pixels (padding excluded)
    pub width: f32,
    /// Content height in pixels; 0 derives it from the line height
    pub height: f32,
    /// Padding around the content area
    pub padding: PaddingConfig,
}

impl Default for CaretConfig {
    fn default() -> Self {
        Self {
            blink_interval: 0.53,
            width: 1.0,
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            color: [0, 0, 0, 255],
            alpha: 0.25,
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: None,
            font_size: 16.0,
            monospace_advance: 8.0,
            mask: None,
        }
    }
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            left: 4.0,
            top: 2.0,
            right: 4.0,
            bottom: 2.0,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 0.0,
            padding: PaddingConfig::default(),
        }
    }
}

impl EditConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from `path`, falling back to defaults.
    ///
    /// A missing file is silent; unreadable or malformed files are logged.
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(err) => {
                tracing::warn!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    /// Load configuration from the default location (rune-edit.toml in the
    /// current directory) or return default configuration
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(DEFAULT_CONFIG_FILE)
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(font) = std::env::var("RUNE_EDIT_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Ok(val) = std::env::var("RUNE_EDIT_FONT_SIZE") {
            match val.parse::<f32>() {
                Ok(size) => self.text.font_size = size,
                Err(_) => tracing::warn!("ignoring invalid RUNE_EDIT_FONT_SIZE={val:?}"),
            }
        }
        if let Ok(val) = std::env::var("RUNE_EDIT_MASK") {
            self.text.mask = val.chars().next();
        }
        if let Ok(val) = std::env::var("RUNE_EDIT_BLINK_INTERVAL") {
            match val.parse::<f32>() {
                Ok(interval) => self.caret.blink_interval = interval,
                Err(_) => tracing::warn!("ignoring invalid RUNE_EDIT_BLINK_INTERVAL={val:?}"),
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune-edit.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditConfig::default();
        assert_eq!(config.caret.blink_interval, 0.53);
        assert_eq!(config.caret.width, 1.0);
        assert_eq!(config.selection.alpha, 0.25);
        assert!(config.text.font.is_none());
        assert!(config.text.mask.is_none());
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = EditConfig::default();
        config.text.mask = Some('*');
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: EditConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EditConfig::from_toml_str(
            r#"
            [caret]
            blink_interval = 0.8

            [input.padding]
            left = 10.0
            "#,
        )
        .unwrap();
        assert_eq!(config.caret.blink_interval, 0.8);
        assert_eq!(config.caret.width, 1.0);
        assert_eq!(config.input.padding.left, 10.0);
        assert_eq!(config.input.padding.right, 4.0);
        assert_eq!(config.input.padding.top, 2.0);
        assert_eq!(config.text.font_size, 16.0);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EditConfig::load_or_default_from("/nonexistent/rune-edit.toml");
        assert_eq!(config, EditConfig::default());
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("RUNE_EDIT_MASK", "#");
            std::env::set_var("RUNE_EDIT_BLINK_INTERVAL", "not-a-number");
        }

        let mut config = EditConfig::default();
        config.merge_with_env();

        assert_eq!(config.text.mask, Some('#'));
        assert_eq!(config.caret.blink_interval, 0.53);

        unsafe {
            std::env::remove_var("RUNE_EDIT_MASK");
            std::env::remove_var("RUNE_EDIT_BLINK_INTERVAL");
        }
    }
}
