//! File I/O operations (export, import, save, load) for designer state.

use std::path::Path;

use anyhow::Context;

use super::DesignerState;
use crate::canvas::DrawingMode;
use crate::error::Result;
use crate::serialization::{parse_layout, ImportReport, ImportedLayout, LayoutFile};

impl DesignerState {
    /// Builds the export document for the current layout.
    pub fn export_layout(&self) -> LayoutFile {
        LayoutFile::from_canvas(&self.canvas)
    }

    /// Serializes the current layout to pretty-printed JSON.
    pub fn export_json(&self) -> Result<String> {
        self.export_layout().to_json(true)
    }

    /// Replaces the layout with the contents of `json`.
    ///
    /// Input that is not JSON is rejected and the state is left untouched.
    /// Anything else is repaired and applied as one undoable step; the
    /// selection, clipboard, wall draft and pending gesture are cleared and
    /// the editor returns to select mode.
    pub fn import_json(&mut self, json: &str) -> Result<ImportReport> {
        let layout = parse_layout(json)?;
        Ok(self.apply_import(layout))
    }

    /// Applies an already normalized layout.
    pub fn apply_import(&mut self, layout: ImportedLayout) -> ImportReport {
        self.push_snapshot();
        self.canvas.replace_contents(layout.objects, layout.walls);
        self.selection.clear();
        self.selection.cancel_marquee();
        self.clipboard.clear();
        self.wall_draft.cancel();
        self.gesture = None;
        self.mode = DrawingMode::Select;
        layout.report
    }

    /// Save layout to file.
    pub fn save_layout(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = self.export_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write layout file: {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        tracing::info!(path = %path.display(), "layout saved");
        Ok(())
    }

    /// Load layout from file.
    pub fn load_layout(&mut self, path: impl AsRef<Path>) -> anyhow::Result<ImportReport> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
        let report = self
            .import_json(&json)
            .with_context(|| format!("Failed to import layout: {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(report)
    }

    /// Name shown in a title bar.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        if self.is_modified {
            format!("{name}*")
        } else {
            name
        }
    }
}
