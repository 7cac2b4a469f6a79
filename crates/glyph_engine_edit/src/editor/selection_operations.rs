#![allow(clippy::missing_errors_doc)]

use glyph_engine::{extract, Position, Rectangle, Result, Slice};

use super::EditState;

impl EditState {
    pub fn select(&mut self, rect: Rectangle) {
        self.selection = Some(rect);
        self.request_repaint();
    }

    pub fn deselect(&mut self) {
        self.selection = None;
        self.request_repaint();
    }

    pub fn select_all(&mut self) {
        self.select(self.grid.bounds());
    }

    /// The region copy and cut work on: the selection, else the cell under the cursor.
    fn clipboard_bounds(&self) -> Option<Rectangle> {
        self.selection.or_else(|| self.cursor.map(|cursor| Rectangle::from_min_size(cursor, 1, 1)))
    }

    pub fn copy(&mut self) {
        let Some(bounds) = self.clipboard_bounds() else {
            return;
        };
        self.clipboard = Some(extract(&self.grid, bounds));
        log::debug!("copied {bounds}");
    }

    /// Copies, then empties the copied region and deselects.
    pub fn cut(&mut self) -> Result<()> {
        let Some(bounds) = self.clipboard_bounds() else {
            return Ok(());
        };
        self.copy();
        self.clear(Some(bounds))
    }

    /// Stages `slice` as the buffer and selects its bounds.
    pub fn stage_buffer(&mut self, slice: Slice) {
        self.selection = Some(slice.bounds);
        self.buffer = Some(slice);
        self.request_repaint();
    }

    /// Throws the staged buffer away without touching the grid.
    pub fn discard_buffer(&mut self) {
        self.buffer = None;
        self.request_repaint();
    }

    /// Moves the staged buffer. The selection follows when `follow` is set.
    pub(crate) fn move_buffer_internal(&mut self, origin: Position, follow: bool) {
        let Some(buffer) = self.buffer.as_mut() else {
            return;
        };
        buffer.set_origin(origin);
        if follow {
            self.selection = Some(buffer.bounds);
        }
        self.request_repaint();
    }

    /// Replaces the buffer with a preview without touching the selection.
    pub(crate) fn set_buffer_internal(&mut self, buffer: Option<Slice>) {
        self.buffer = buffer;
        self.request_repaint();
    }

    pub fn set_clipboard(&mut self, slice: Option<Slice>) {
        self.clipboard = slice;
    }
}
