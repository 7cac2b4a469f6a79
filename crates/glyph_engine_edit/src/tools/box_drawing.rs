use glyph_engine::{Cell, Grid, Mask, Position, Rectangle, Slice};

use crate::{
    brushes::{draw_box, BoxCharset, DrawTarget, PointRole},
    EditState, InputEvent, Key, PointerAction,
};

use super::{log_result, ToolResult};

/// Drags out a box outline. The outline is staged in the buffer as a preview
/// and committed as one blit on release.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoxDrawingTool {
    pub charset: BoxCharset,
    pub p0: Option<Position>,
    pub p1: Option<Position>,
}

impl BoxDrawingTool {
    pub fn new(charset: BoxCharset) -> Self {
        Self { charset, p0: None, p1: None }
    }

    pub fn handle_event(&mut self, state: &mut EditState, event: &InputEvent) -> ToolResult {
        let pointer = match event {
            InputEvent::Key(key) if key.key == Key::Escape => {
                if self.p0.take().is_some() {
                    state.discard_buffer();
                }
                self.p1 = None;
                return ToolResult::PopTool;
            }
            InputEvent::Key(_) => return ToolResult::None,
            InputEvent::Pointer(pointer) => pointer,
        };

        if pointer.action == PointerAction::Down {
            self.p0 = self.p0.or(Some(pointer.position));
        }
        // pointer events belong to the box tool even before a drag starts
        let Some(p0) = self.p0 else {
            return ToolResult::Redraw;
        };
        self.p1 = Some(pointer.position);
        let bounds = Rectangle::from_points(p0, pointer.position);
        let preview = self.trace(state, bounds);
        state.set_buffer_internal(Some(preview));

        if pointer.action == PointerAction::Up {
            log_result(state.commit());
            self.p0 = None;
            self.p1 = None;
        }
        ToolResult::Redraw
    }

    fn trace(&self, state: &EditState, bounds: Rectangle) -> Slice {
        let mut target = PreviewTarget {
            grid: state.grid(),
            mask: state.mask(),
            foreground: state.current_foreground(),
            background: state.current_background(),
            slice: Slice::sparse(bounds),
        };
        draw_box(&mut target, &self.charset, bounds);
        target.slice
    }
}

/// Writes traced glyphs into a sparse slice, masked against the grid below.
struct PreviewTarget<'a> {
    grid: &'a Grid,
    mask: Mask,
    foreground: &'a str,
    background: &'a str,
    slice: Slice,
}

impl DrawTarget for PreviewTarget<'_> {
    fn plot(&mut self, pos: Position, glyph: char, _role: PointRole) {
        let brush = Cell::new(glyph.to_string(), self.foreground, self.background);
        let cell = self.grid.get_cell(pos).masked(self.mask, &brush);
        let local = pos - self.slice.origin();
        self.slice.set(local, cell);
    }
}
