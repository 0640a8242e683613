//! # FloorKit
//!
//! A floor-plan layout editor for restaurants, wards and hostels:
//! - Dining tables, beds, stairs and room labels on a normalized canvas
//! - Straight walls with endpoint snapping and axis locking
//! - Group-aware selection, drag, resize and rotate with undo
//! - A versioned JSON layout export with lenient import of older files
//!
//! ## Architecture
//!
//! FloorKit is organized as a workspace with multiple crates:
//!
//! 1. **floorkit-designer** - Geometry, object model, selection, history and
//!    the layout codec
//! 2. **floorkit-settings** - Persisted configuration
//! 3. **floorkit** - Re-exports and the command-line front end

pub mod cli;

pub use floorkit_designer as designer;

pub use floorkit_designer::{
    parse_layout, BedStatus, Canvas, CanvasSize, DesignerCommand, DesignerError, DesignerState,
    DrawingMode, ImportReport, ImportedLayout, InteractionConfig, LayoutFile, Modifiers,
    PlacedObject, Point, ShapeKind, Wall,
};

pub use floorkit_settings::{Config, ConfigError, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so command output on stdout stays clean
/// - RUST_LOG environment variable support, defaulting to `info`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
