#![allow(clippy::missing_errors_doc)]

use glyph_engine::{extract, insert, Cell, Grid, Mask, Position, Rectangle, Result, Slice};

use super::{Command, EditState, UndoStack};

impl EditState {
    /// Painting is allowed inside the selection, or anywhere on the grid
    /// when nothing is selected.
    pub fn can_paint_at(&self, pos: impl Into<Position>) -> bool {
        let bounds = self.selection.unwrap_or_else(|| self.grid.bounds());
        bounds.contains_pt(pos.into())
    }

    /// Paints the brush at the cursor through the current mask.
    /// Without a cursor, outside the selection or when nothing would change this does nothing.
    pub fn paint(&mut self) -> Result<()> {
        let Some(pos) = self.cursor else {
            return Ok(());
        };
        if !self.can_paint_at(pos) {
            return Ok(());
        }
        let cell = self.grid.get_cell(pos);
        let target = cell.masked(self.mask, &self.brush());
        if target == cell {
            return Ok(());
        }
        self.execute(Command::paint(pos.x, pos.y, target))
    }

    /// Empties all channels of the cell at the cursor, ignoring the mask.
    pub fn erase(&mut self) -> Result<()> {
        let Some(pos) = self.cursor else {
            return Ok(());
        };
        if !self.can_paint_at(pos) || self.grid.get_cell(pos).is_empty() {
            return Ok(());
        }
        self.execute(Command::paint(pos.x, pos.y, Cell::empty()))
    }

    /// Writes the brush over every cell of the selection in one step.
    pub fn fill_selection(&mut self) -> Result<()> {
        let Some(selection) = self.selection else {
            return Ok(());
        };
        let brush = self.brush();
        let mask = self.mask;
        let mut slice = extract(&self.grid, selection);
        for cell in slice.iter_mut() {
            *cell = cell.masked(mask, &brush);
        }
        self.execute(Command::Blit { slice })
    }

    /// Empties `bounds`, the selection or the whole grid, in that order of
    /// preference, and deselects.
    pub fn clear(&mut self, bounds: Option<Rectangle>) -> Result<()> {
        let bounds = bounds.or(self.selection).unwrap_or_else(|| self.grid.bounds());
        self.execute(Command::Blit { slice: Slice::clear(bounds) })?;
        self.deselect();
        Ok(())
    }

    /// Writes the staged buffer into the grid and drops buffer and selection.
    pub fn commit(&mut self) -> Result<()> {
        let Some(slice) = self.buffer.take() else {
            return Ok(());
        };
        let res = self.execute(Command::Blit { slice });
        self.selection = None;
        self.request_repaint();
        res
    }

    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        self.execute(Command::Resize { width, height })
    }

    pub fn set_canvas_color(&mut self, color: impl Into<String>) -> Result<()> {
        self.execute(Command::SetCanvasColor { color: color.into() })
    }

    /// Replaces the document with `slice`: a fresh grid the size of the slice
    /// with the cells spliced in at the origin. The history is dropped since
    /// its commands refer to the old document.
    pub fn import_slice(&mut self, slice: &Slice) {
        let mut grid = Grid::new(slice.width(), slice.height());
        let mut local = slice.clone();
        local.set_origin(Position::default());
        insert(&mut grid, &local);
        log::info!("imported {}x{} cells", grid.width(), grid.height());
        self.set_grid_internal(grid);
        self.set_undo_stack_internal(UndoStack::new());
    }

    /// Takes the glyph and colors under `pos` as the new drawing values.
    pub fn sample(&mut self, pos: impl Into<Position>) {
        let cell = self.grid.get_cell(pos);
        self.current_glyph = cell.glyph;
        self.current_foreground = cell.foreground;
        self.current_background = cell.background;
        self.request_repaint();
    }

    pub fn swap_colors(&mut self) {
        std::mem::swap(&mut self.current_foreground, &mut self.current_background);
        self.request_repaint();
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    pub fn set_mask(&mut self, mask: Mask) {
        self.mask = mask;
        self.request_repaint();
    }

    pub fn toggle_glyph_mask(&mut self) {
        self.mask.glyph = !self.mask.glyph;
        self.request_repaint();
    }

    pub fn toggle_foreground_mask(&mut self) {
        self.mask.foreground = !self.mask.foreground;
        self.request_repaint();
    }

    pub fn toggle_background_mask(&mut self) {
        self.mask.background = !self.mask.background;
        self.request_repaint();
    }

    /// Moves the cursor. Positions off the grid remove it.
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = if self.grid.is_inside((x, y)) { Some(Position::new(x, y)) } else { None };
        self.request_repaint();
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
        self.request_repaint();
    }

    pub fn toggle_debug(&mut self) {
        self.settings.debug = !self.settings.debug;
        self.request_repaint();
    }
}
