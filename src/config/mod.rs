//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inkboard/config.toml`. Settings
//! include stroke styles per tool, default shape geometry, the circle swatch
//! palette, and stage behavior such as the drag boundary clamp.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{LimitsConfig, ShapesConfig, StageConfig, StrokeConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [stage]
/// width = 1280.0
/// height = 720.0
/// clamp_to_stage = true
///
/// [stroke]
/// width = 2.0
/// solid_color = "red"
/// dashed_pattern = [10.0, 5.0]
///
/// [shapes]
/// circle_radius = 25.0
/// default_fill = "white"
///
/// [limits]
/// max_entities = 0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Stage dimensions and drag clamping
    #[serde(default)]
    pub stage: StageConfig,

    /// Per-tool stroke styles
    #[serde(default)]
    pub stroke: StrokeConfig,

    /// Default shape geometry and swatch palette
    #[serde(default)]
    pub shapes: ShapesConfig,

    /// Session limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke.width`: 0.5 - 20.0
    /// - `stage.width` / `stage.height`: >= 1.0
    /// - shape sizes: 1.0 - 1000.0
    /// - dash patterns: non-empty, all lengths > 0 (invalid patterns fall
    ///   back to the defaults)
    fn validate_and_clamp(&mut self) {
        // Stroke width: 0.5 - 20.0
        if !(0.5..=20.0).contains(&self.stroke.width) {
            log::warn!(
                "Invalid stroke width {:.1}, clamping to 0.5-20.0 range",
                self.stroke.width
            );
            self.stroke.width = self.stroke.width.clamp(0.5, 20.0);
        }

        // Stage dimensions must be at least one pixel
        if self.stage.width < 1.0 {
            log::warn!("Invalid stage width {:.1}, clamping to 1.0", self.stage.width);
            self.stage.width = 1.0;
        }
        if self.stage.height < 1.0 {
            log::warn!(
                "Invalid stage height {:.1}, clamping to 1.0",
                self.stage.height
            );
            self.stage.height = 1.0;
        }

        // Shape sizes: 1.0 - 1000.0
        for (name, value) in [
            ("rect_width", &mut self.shapes.rect_width),
            ("rect_height", &mut self.shapes.rect_height),
            ("circle_radius", &mut self.shapes.circle_radius),
            ("triangle_radius", &mut self.shapes.triangle_radius),
        ] {
            if !(1.0..=1000.0).contains(value) {
                log::warn!("Invalid {name} {value:.1}, clamping to 1.0-1000.0 range");
                *value = value.clamp(1.0, 1000.0);
            }
        }

        // Dash patterns must be non-empty with positive segment lengths
        if self.stroke.dashed_pattern.is_empty()
            || self.stroke.dashed_pattern.iter().any(|len| *len <= 0.0)
        {
            log::warn!(
                "Invalid dashed_pattern {:?}, falling back to [10, 5]",
                self.stroke.dashed_pattern
            );
            self.stroke.dashed_pattern = vec![10.0, 5.0];
        }
        if self.stroke.dotted_pattern.is_empty()
            || self.stroke.dotted_pattern.iter().any(|len| *len <= 0.0)
        {
            log::warn!(
                "Invalid dotted_pattern {:?}, falling back to [3, 3]",
                self.stroke.dotted_pattern
            );
            self.stroke.dotted_pattern = vec![3.0, 3.0];
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/inkboard/config.toml`. If the file doesn't exist, returns
    /// a Config with default values. All loaded values are validated and
    /// clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/inkboard/config.toml`. Creates the parent directory if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
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
    /// config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<()> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED, WHITE};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_resolves_tool_styles() {
        let config = Config::default();
        assert_eq!(config.stroke.width, 2.0);
        assert_eq!(config.stroke.solid_color.to_color(), RED);
        assert_eq!(config.stroke.dotted_color.to_color(), BLUE);
        assert_eq!(config.stroke.dashed_pattern, vec![10.0, 5.0]);
        assert_eq!(config.shapes.default_fill.to_color(), WHITE);
        assert!(config.stage.clamp_to_stage);
        assert_eq!(config.limits.max_entities, 0);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[stroke]\nwidth = 4.0").unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.stroke.width, 4.0);
        assert_eq!(config.shapes.circle_radius, 25.0);
        assert_eq!(config.stage, StageConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[stroke]\nwidth = 100.0\ndashed_pattern = []\n\n[shapes]\ncircle_radius = 0.0"
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.stroke.width, 20.0);
        assert_eq!(config.stroke.dashed_pattern, vec![10.0, 5.0]);
        assert_eq!(config.shapes.circle_radius, 1.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[stroke\nwidth = ").unwrap();

        assert!(Config::load_from_path(file.path()).is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn example_config_parses_to_defaults() {
        let example = include_str!("../../config.example.toml");
        let parsed: Config = toml::from_str(example).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
