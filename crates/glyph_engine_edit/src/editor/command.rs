//! Editor commands as serializable enum
//!
//! Every grid mutation goes through a [`Command`]. Applying a command returns
//! the command that undoes it, so the undo and redo stacks hold nothing but
//! commands and both directions share one code path.

use serde::{Deserialize, Serialize};

use glyph_engine::{extract, insert, Cell, EngineError, Result, Slice};

use super::EditState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Command {
    /// Overwrite all three channels of one cell
    Paint {
        x: i32,
        y: i32,
        glyph: String,
        #[serde(rename = "foregroundColor")]
        foreground: String,
        #[serde(rename = "backgroundColor")]
        background: String,
    },

    /// Write a slice into the grid
    Blit { slice: Slice },

    SetCanvasColor { color: String },

    /// Change the grid dimensions. Undoing it restores the dimensions only,
    /// content clipped by a shrink stays lost.
    Resize { width: i32, height: i32 },
}

impl Command {
    pub fn paint(x: i32, y: i32, cell: Cell) -> Self {
        Command::Paint {
            x,
            y,
            glyph: cell.glyph,
            foreground: cell.foreground,
            background: cell.background,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Command::Paint { x, y, glyph, .. } => format!("Paint '{glyph}' at ({x}, {y})"),
            Command::Blit { slice } if slice.is_clear() => format!("Clear {}", slice.bounds),
            Command::Blit { slice } => format!("Blit {}", slice.bounds),
            Command::SetCanvasColor { color } => format!("Set canvas color to {color}"),
            Command::Resize { width, height } => format!("Resize to {width}x{height}"),
        }
    }

    /// Applies the command and returns its inverse.
    ///
    /// # Errors
    ///
    /// Malformed commands are rejected before anything is changed: a paint
    /// outside the grid, negative dimensions or a slice whose cell count
    /// doesn't match its bounds.
    pub fn apply(&self, state: &mut EditState) -> Result<Command> {
        match self {
            Command::Paint {
                x,
                y,
                glyph,
                foreground,
                background,
            } => {
                let (width, height) = (state.grid.width(), state.grid.height());
                let Some(cell) = state.grid.cell_mut((*x, *y)) else {
                    return Err(EngineError::OutOfBounds { x: *x, y: *y, width, height });
                };
                let prev = std::mem::replace(cell, Cell::new(glyph.as_str(), foreground.as_str(), background.as_str()));
                Ok(Command::paint(*x, *y, prev))
            }
            Command::Blit { slice } => {
                if !slice.bounds.is_valid() {
                    return Err(EngineError::InvalidSize {
                        width: slice.bounds.width,
                        height: slice.bounds.height,
                    });
                }
                if !slice.is_clear() && slice.cells.len() != slice.bounds.area() {
                    return Err(EngineError::CellCountMismatch {
                        expected: slice.bounds.area(),
                        actual: slice.cells.len(),
                    });
                }
                let prev = extract(&state.grid, slice.bounds);
                insert(&mut state.grid, slice);
                Ok(Command::Blit { slice: prev })
            }
            Command::SetCanvasColor { color } => {
                let prev = std::mem::replace(&mut state.canvas_color, color.clone());
                Ok(Command::SetCanvasColor { color: prev })
            }
            Command::Resize { width, height } => {
                if *width < 0 || *height < 0 {
                    return Err(EngineError::InvalidSize { width: *width, height: *height });
                }
                let prev = Command::Resize {
                    width: state.grid.width(),
                    height: state.grid.height(),
                };
                state.grid.resize(*width, *height);
                if state.cursor.is_some_and(|c| !state.grid.is_inside(c)) {
                    state.cursor = None;
                }
                Ok(prev)
            }
        }
    }
}
