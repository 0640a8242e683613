//! FloorKit Settings Crate
//!
//! Handles the persisted editor configuration: interaction thresholds, the
//! default canvas size and export options.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, ExportSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, SettingsError, SettingsResult};
