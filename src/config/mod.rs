//! Configuration file support for overscribe.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/overscribe/config.toml`.
//! Settings cover the pen defaults and UI preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{DrawingConfig, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::draw::PaletteColor;
use crate::input::StrokeWidth;

/// Errors surfaced by config file management.
///
/// Parse and validation problems never appear here: unknown values are
/// snapped to valid ones with a warning instead, so a hand-edited config can
/// not keep the overlay from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined (e.g. HOME unset)
    #[error("could not determine the user config directory")]
    NoConfigDir,

    /// `--init-config` refuses to overwrite an existing file
    #[error("config file already exists at {0}")]
    AlreadyExists(PathBuf),

    /// Underlying filesystem failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Main configuration structure containing all user settings.
///
/// This is the root type deserialized from the TOML file. All fields have
/// defaults and use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_width = 5
///
/// [ui]
/// show_cursor_indicator = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pen defaults (color, width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates all configuration values, snapping invalid ones.
    ///
    /// Config values are advisory, unlike command parameters (which are
    /// rejected outright): an unknown color name falls back to red and an
    /// off-scale width snaps to the nearest selectable step, each with a
    /// logged warning.
    fn validate_and_clamp(&mut self) {
        if PaletteColor::from_name(&self.drawing.default_color).is_none() {
            warn!(
                "Unknown default_color '{}', falling back to 'red'",
                self.drawing.default_color
            );
            self.drawing.default_color = PaletteColor::Red.name().to_string();
        }

        if StrokeWidth::from_px(self.drawing.default_width).is_none() {
            let snapped = StrokeWidth::nearest(self.drawing.default_width);
            warn!(
                "default_width {} is not one of the selectable widths, snapping to {}",
                self.drawing.default_width,
                snapped.px()
            );
            self.drawing.default_width = snapped.px() as u32;
        }
    }

    /// The resolved default pen color.
    pub fn default_color(&self) -> PaletteColor {
        PaletteColor::from_name(&self.drawing.default_color).unwrap_or_default()
    }

    /// The resolved default pen width.
    pub fn default_width(&self) -> StrokeWidth {
        StrokeWidth::from_px(self.drawing.default_width)
            .unwrap_or_else(|| StrokeWidth::nearest(self.drawing.default_width))
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/overscribe/config.toml`.
    pub fn get_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("overscribe");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and snapped to acceptable ones.
    ///
    /// # Errors
    /// Returns an error if the config directory path cannot be determined,
    /// or if the file exists but cannot be read or contains invalid TOML.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates a TOML string.
    pub fn from_toml(config_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Creates the parent directory if it doesn't exist. Intended for
    /// embedders that expose runtime config editing.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory. Backs `overscribe --init-config`.
    ///
    /// # Errors
    /// Returns [`ConfigError::AlreadyExists`] if a config file is already
    /// present at the target path.
    pub fn create_default_file() -> Result<PathBuf, ConfigError> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(ConfigError::AlreadyExists(config_path));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_product_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.default_color(), PaletteColor::Red);
        assert_eq!(config.default_width(), StrokeWidth::Px5);
        assert!(config.ui.show_cursor_indicator);
    }

    #[test]
    fn explicit_values_are_resolved() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_color = "green"
            default_width = 8

            [ui]
            show_cursor_indicator = false
            "#,
        )
        .unwrap();
        assert_eq!(config.default_color(), PaletteColor::Green);
        assert_eq!(config.default_width(), StrokeWidth::Px8);
        assert!(!config.ui.show_cursor_indicator);
    }

    #[test]
    fn unknown_color_falls_back_to_red() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_color = "chartreuse"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_color(), PaletteColor::Red);
        assert_eq!(config.drawing.default_color, "red");
    }

    #[test]
    fn off_scale_width_snaps_to_nearest_step() {
        let config = Config::from_toml(
            r#"
            [drawing]
            default_width = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.default_width(), StrokeWidth::Px10);
        assert_eq!(config.drawing.default_width, 10);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml("drawing = 3").is_err());
    }
}
