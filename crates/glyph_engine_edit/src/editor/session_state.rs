//! Document snapshot
//!
//! Contains everything needed to restore a document, including:
//! - Grid dimensions and cells
//! - Undo/redo stacks
//! - Current drawing glyph and colors
//! - Display settings

use serde::{Deserialize, Deserializer, Serialize};

use glyph_engine::{Cell, EngineError, Grid, Result};

use super::{Command, EditState, Settings, UndoStack, DEFAULT_CANVAS_COLOR};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,

    #[serde(default)]
    pub settings: Settings,

    pub width: i32,
    pub height: i32,

    /// Row major, `width * height` entries. `null` entries load as empty cells.
    #[serde(deserialize_with = "deserialize_cells")]
    pub cells: Vec<Cell>,

    #[serde(default)]
    pub undos: Vec<Command>,
    #[serde(default)]
    pub redos: Vec<Command>,

    pub current_foreground_color: String,
    pub current_background_color: String,
    pub current_glyph: String,

    #[serde(default = "default_canvas_color")]
    pub canvas_color: String,
}

fn default_canvas_color() -> String {
    DEFAULT_CANVAS_COLOR.to_string()
}

fn deserialize_cells<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<Cell>, D::Error> {
    let cells: Vec<Option<Cell>> = Vec::deserialize(deserializer)?;
    Ok(cells.into_iter().map(Option::unwrap_or_default).collect())
}

impl Snapshot {
    /// # Errors
    ///
    /// Fails on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Fails if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Fails if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl EditState {
    pub fn snapshot(&self) -> Snapshot {
        let (undos, redos) = self.undo_stack().clone().into_parts();
        Snapshot {
            version: SNAPSHOT_VERSION,
            settings: self.settings.clone(),
            width: self.grid.width(),
            height: self.grid.height(),
            cells: self.grid.cells().to_vec(),
            undos,
            redos,
            current_foreground_color: self.current_foreground.clone(),
            current_background_color: self.current_background.clone(),
            current_glyph: self.current_glyph.clone(),
            canvas_color: self.canvas_color.clone(),
        }
    }

    /// Loads `snapshot` into this state. Cursor, selection and buffer are reset.
    ///
    /// # Errors
    ///
    /// Rejects snapshots of another version and cell arrays that don't
    /// match the dimensions. The state is unchanged on error.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(EngineError::UnsupportedSnapshotVersion {
                version: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        let grid = Grid::from_cells(snapshot.width, snapshot.height, snapshot.cells)?;
        log::info!(
            "restoring {}x{} snapshot ({} undos, {} redos)",
            grid.width(),
            grid.height(),
            snapshot.undos.len(),
            snapshot.redos.len()
        );
        self.set_grid_internal(grid);
        self.set_undo_stack_internal(UndoStack::from_parts(snapshot.undos, snapshot.redos));
        self.settings = snapshot.settings;
        self.current_foreground = snapshot.current_foreground_color;
        self.current_background = snapshot.current_background_color;
        self.current_glyph = snapshot.current_glyph;
        self.canvas_color = snapshot.canvas_color;
        Ok(())
    }
}
