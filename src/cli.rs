//! Command-line front end over the layout codec.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use floorkit_designer::{
    parse_layout, status_counts, CanvasSize, DesignerState, ImportSource, ImportedLayout,
    ShapeKind,
};
use floorkit_settings::Config;

#[derive(Parser, Debug)]
#[command(name = "floorkit", version, about = "Floor-plan layout tools")]
pub struct Cli {
    /// Settings file (JSON or TOML). Defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import any layout JSON, repairing it, and write a current export.
    Normalize {
        input: PathBuf,
        /// Output file. Writes to stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Canvas width in pixels recorded in the export.
        #[arg(long)]
        width: Option<f64>,
        /// Canvas height in pixels recorded in the export.
        #[arg(long)]
        height: Option<f64>,
    },
    /// Print object, wall and bed status counts of a layout.
    Inspect { input: PathBuf },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Normalize {
            input,
            output,
            width,
            height,
        } => {
            let json = read_input(&input)?;
            let normalized = normalize(&json, width, height, &config)?;
            match output {
                Some(path) => std::fs::write(&path, normalized)
                    .with_context(|| format!("Failed to write layout file: {}", path.display()))?,
                None => println!("{normalized}"),
            }
        }
        Command::Inspect { input } => {
            let json = read_input(&input)?;
            let layout = parse_layout(&json)
                .with_context(|| format!("Failed to import layout: {}", input.display()))?;
            print!("{}", summarize(&layout));
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load settings: {}", path.display())),
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load settings: {}", path.display())),
            Err(err) => {
                tracing::debug!(%err, "using default settings");
                Ok(Config::default())
            }
        },
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))
}

/// Repairs `json` into a current export.
///
/// The recorded canvas size is taken from the flags, else from the input's
/// `canvasPx`, else from the settings.
pub fn normalize(
    json: &str,
    width: Option<f64>,
    height: Option<f64>,
    config: &Config,
) -> anyhow::Result<String> {
    let layout = parse_layout(json)?;
    let base = layout.canvas_px.unwrap_or_else(|| config.canvas.size());
    let size = CanvasSize::new(width.unwrap_or(base.width), height.unwrap_or(base.height));
    if !size.is_valid() {
        anyhow::bail!("Invalid canvas size {} x {}", size.width, size.height);
    }

    let mut state = DesignerState::with_config(config.editor.clone(), size);
    let report = state.apply_import(layout);
    tracing::info!(
        objects = state.canvas.object_count(),
        walls = state.canvas.wall_count(),
        repaired = report.repaired_fields,
        generated_ids = report.generated_ids,
        "layout normalized"
    );
    Ok(state.export_layout().to_json(config.export.pretty)?)
}

/// Human-readable counts for `inspect`.
pub fn summarize(layout: &ImportedLayout) -> String {
    let mut out = String::new();
    let source = match layout.report.object_source {
        ImportSource::Editor => "editor",
        ImportSource::Seating => "seating list",
        ImportSource::Empty => "none",
    };
    let _ = writeln!(out, "objects: {} (from {source})", layout.objects.len());
    for shape in ShapeKind::ALL {
        let count = layout.objects.iter().filter(|o| o.shape == shape).count();
        if count > 0 {
            let _ = writeln!(out, "  {shape}: {count}");
        }
    }
    let _ = writeln!(out, "walls: {}", layout.walls.len());

    if layout.objects.iter().any(|o| o.is_bed()) {
        let _ = writeln!(out, "beds:");
        for (status, count) in status_counts(&layout.objects) {
            let _ = writeln!(out, "  {status}: {count}");
        }
    }

    let report = &layout.report;
    if report.repaired_fields + report.generated_ids + report.dropped_walls > 0 {
        let _ = writeln!(
            out,
            "repaired fields: {}, generated ids: {}, dropped walls: {}",
            report.repaired_fields, report.generated_ids, report.dropped_walls
        );
    }
    out
}
