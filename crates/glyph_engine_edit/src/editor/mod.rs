pub mod undo_stack;
pub use undo_stack::*;

pub mod command;
pub use command::Command;

pub mod session_state;
pub use session_state::{Snapshot, SNAPSHOT_VERSION};

mod settings;
pub use settings::*;

mod edit_operations;
mod selection_operations;

use glyph_engine::{Cell, Grid, Mask, Position, Rectangle, Result, Slice};

pub const DEFAULT_WIDTH: i32 = 48;
pub const DEFAULT_HEIGHT: i32 = 24;
pub const DEFAULT_CANVAS_COLOR: &str = "#171618";
pub const DEFAULT_GLYPH: &str = "o";
pub const DEFAULT_FOREGROUND: &str = "white";

/// The single owner of one open document: grid, history, selection and the
/// staged buffer, plus the current drawing values.
///
/// Only [`Command::apply`] mutates the grid and only [`EditState::execute`],
/// [`UndoState::undo`] and [`UndoState::redo`] touch the history stacks.
#[derive(Clone, Debug)]
pub struct EditState {
    pub(crate) grid: Grid,
    pub(crate) canvas_color: String,
    undo_stack: UndoStack,

    pub(crate) cursor: Option<Position>,
    pub(crate) selection: Option<Rectangle>,
    /// Staged edit shown as a preview until it is committed
    pub(crate) buffer: Option<Slice>,
    pub(crate) clipboard: Option<Slice>,

    pub(crate) current_glyph: String,
    pub(crate) current_foreground: String,
    pub(crate) current_background: String,
    pub(crate) mask: Mask,

    pub(crate) settings: Settings,

    repaint_requested: bool,
    repaint_generation: u64,
}

impl Default for EditState {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl EditState {
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_grid(Grid::new(width, height))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            canvas_color: DEFAULT_CANVAS_COLOR.to_string(),
            undo_stack: UndoStack::new(),
            cursor: None,
            selection: None,
            buffer: None,
            clipboard: None,
            current_glyph: DEFAULT_GLYPH.to_string(),
            current_foreground: DEFAULT_FOREGROUND.to_string(),
            current_background: String::new(),
            mask: Mask::ALL,
            settings: Settings::default(),
            repaint_requested: false,
            repaint_generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bounds(&self) -> Rectangle {
        self.grid.bounds()
    }

    pub fn canvas_color(&self) -> &str {
        &self.canvas_color
    }

    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    pub fn selection(&self) -> Option<Rectangle> {
        self.selection
    }

    pub fn buffer(&self) -> Option<&Slice> {
        self.buffer.as_ref()
    }

    pub fn clipboard(&self) -> Option<&Slice> {
        self.clipboard.as_ref()
    }

    pub fn current_glyph(&self) -> &str {
        &self.current_glyph
    }

    pub fn set_current_glyph(&mut self, glyph: impl Into<String>) {
        self.current_glyph = glyph.into();
    }

    pub fn current_foreground(&self) -> &str {
        &self.current_foreground
    }

    pub fn set_current_foreground(&mut self, color: impl Into<String>) {
        self.current_foreground = color.into();
    }

    pub fn current_background(&self) -> &str {
        &self.current_background
    }

    pub fn set_current_background(&mut self, color: impl Into<String>) {
        self.current_background = color.into();
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo_stack
    }

    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.undo_len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.undo_stack.redo_len()
    }

    pub(crate) fn set_undo_stack_internal(&mut self, undo_stack: UndoStack) {
        self.undo_stack = undo_stack;
    }

    pub(crate) fn set_grid_internal(&mut self, grid: Grid) {
        self.grid = grid;
        self.cursor = None;
        self.selection = None;
        self.buffer = None;
        self.request_repaint();
    }

    /// The current drawing values as a cell.
    pub fn brush(&self) -> Cell {
        Cell::new(self.current_glyph.as_str(), self.current_foreground.as_str(), self.current_background.as_str())
    }

    /// Applies `cmd`, records its inverse and drops the redo path.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Command::apply`]; the history is untouched then.
    pub fn execute(&mut self, cmd: Command) -> Result<()> {
        let inverse = match cmd.apply(self) {
            Ok(inverse) => inverse,
            Err(err) => {
                log::warn!("rejected command '{}': {err}", cmd.description());
                return Err(err);
            }
        };
        log::debug!("execute: {}", cmd.description());
        self.undo_stack.push(inverse);
        self.request_repaint();
        Ok(())
    }

    /// Signals the render collaborator that visible state changed.
    pub fn request_repaint(&mut self) {
        self.repaint_requested = true;
        self.repaint_generation = self.repaint_generation.wrapping_add(1);
    }

    /// Returns whether a repaint was requested since the last call and resets the flag.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Counts repaint requests since the state was created.
    pub fn repaint_generation(&self) -> u64 {
        self.repaint_generation
    }

    /// What the renderer shows at `pos`: the staged buffer where it covers
    /// the position, the grid cell everywhere else.
    pub fn preview_cell_at(&self, pos: impl Into<Position>) -> Cell {
        let pos = pos.into();
        if let Some(cell) = self.buffer.as_ref().and_then(|b| b.written_cell_at(pos)) {
            return cell;
        }
        self.grid.get_cell(pos)
    }
}

impl UndoState for EditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        let Some(cmd) = self.undo_stack.pop_undo() else {
            return Ok(());
        };
        match cmd.apply(self) {
            Ok(inverse) => {
                log::debug!("undo: {}", cmd.description());
                self.undo_stack.push_redo(inverse);
                self.request_repaint();
                Ok(())
            }
            Err(err) => {
                log::warn!("undo of '{}' failed: {err}", cmd.description());
                self.undo_stack.push_undo(cmd);
                Err(err)
            }
        }
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        let Some(cmd) = self.undo_stack.pop_redo() else {
            return Ok(());
        };
        match cmd.apply(self) {
            Ok(inverse) => {
                log::debug!("redo: {}", cmd.description());
                self.undo_stack.push_undo(inverse);
                self.request_repaint();
                Ok(())
            }
            Err(err) => {
                log::warn!("redo of '{}' failed: {err}", cmd.description());
                self.undo_stack.push_redo(cmd);
                Err(err)
            }
        }
    }
}
