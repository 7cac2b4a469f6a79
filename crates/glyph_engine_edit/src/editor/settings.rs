use serde::{Deserialize, Serialize};

use glyph_engine::Position;

pub const DEFAULT_FONT_FAMILY: &str = "ui-monospace, SFMono-Regular, SF Mono, Menlo, Consolas, Liberation Mono, monospace";

/// Document display settings, stored with every snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub debug: bool,
    pub cell_width: i32,
    pub cell_height: i32,
    pub font_size: i32,
    pub font_family: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            cell_width: 13,
            cell_height: 26,
            font_size: 20,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl Settings {
    /// Projects a pixel coordinate relative to the canvas onto a cell.
    pub fn screen_to_grid(&self, x: f32, y: f32) -> Position {
        Position::new(
            (x / self.cell_width.max(1) as f32).floor() as i32,
            (y / self.cell_height.max(1) as f32).floor() as i32,
        )
    }
}
