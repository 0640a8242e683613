//! Configuration and settings management for FloorKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, chosen by file extension, stored in the platform
//! configuration directory.
//!
//! Configuration is organized into sections:
//! - Editor interaction thresholds
//! - Default canvas size
//! - Export options

use std::path::{Path, PathBuf};

use floorkit_designer::geometry::CanvasSize;
use floorkit_designer::serialization::DEFAULT_FILE_NAME;
use floorkit_designer::InteractionConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// File name of the configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default canvas size for new sessions, in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl CanvasSettings {
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }
}

/// Export options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Indent exported JSON
    pub pretty: bool,
    /// File name offered for new exports
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            pretty: true,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
/// Sections missing from a file take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Pointer interaction thresholds
    pub editor: InteractionConfig,
    /// Default canvas size
    pub canvas: CanvasSettings,
    /// Export options
    pub export: ExportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/floorkit/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("floorkit").join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let editor = &self.editor;
        let thresholds = [
            ("editor.snap_tolerance_px", editor.snap_tolerance_px),
            ("editor.axis_lock_threshold_px", editor.axis_lock_threshold_px),
            ("editor.min_wall_length_px", editor.min_wall_length_px),
            ("editor.min_object_size_px", editor.min_object_size_px),
            ("editor.min_room_label_size_px", editor.min_room_label_size_px),
            ("editor.marquee_click_threshold_px", editor.marquee_click_threshold_px),
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
        ];
        for (key, value) in thresholds {
            if !(value.is_finite() && value > 0.0) {
                return Err(out_of_range(key, value));
            }
        }

        // A zero paste offset is allowed: copies land on their sources.
        if !(editor.paste_offset_px.is_finite() && editor.paste_offset_px >= 0.0) {
            return Err(out_of_range("editor.paste_offset_px", editor.paste_offset_px));
        }

        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange {
                key: "export.file_name".to_string(),
                value: String::new(),
            });
        }
        Ok(())
    }
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
