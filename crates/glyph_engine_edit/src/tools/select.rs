use glyph_engine::{extract, Position, Rectangle};

use crate::{EditState, InputEvent, Key, PointerAction};

use super::{log_result, ToolResult};

/// Rectangular selection.
///
/// Dragging selects. Pressing inside the selection cuts it into the buffer
/// and moves it with the pointer until release, which commits it. During a
/// move `p0` is the press position and `p1` the selection origin at that time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectTool {
    pub p0: Option<Position>,
    pub p1: Option<Position>,
}

impl SelectTool {
    fn reset(&mut self) {
        self.p0 = None;
        self.p1 = None;
    }

    pub fn handle_event(&mut self, state: &mut EditState, event: &InputEvent) -> ToolResult {
        let pointer = match event {
            InputEvent::Key(key) if key.key == Key::Escape => return self.escape(state),
            InputEvent::Key(_) => return ToolResult::None,
            InputEvent::Pointer(pointer) => pointer,
        };
        let cursor = state.cursor();
        let moving = state.buffer().is_some();

        match pointer.action {
            PointerAction::Down => {
                if let (Some(selection), Some(cursor)) = (state.selection(), cursor) {
                    if selection.contains_pt(cursor) {
                        self.begin_move(state, selection, cursor);
                        return ToolResult::Redraw;
                    }
                }
                self.p0 = self.p0.or(cursor);
                ToolResult::None
            }
            PointerAction::Move if moving => {
                let (Some(cursor), Some(p0), Some(p1)) = (cursor, self.p0, self.p1) else {
                    return ToolResult::None;
                };
                state.move_buffer_internal(cursor + (p1 - p0), true);
                ToolResult::Redraw
            }
            PointerAction::Move => {
                let Some(p0) = self.p0 else {
                    return ToolResult::None;
                };
                if cursor.is_some() {
                    self.p1 = cursor;
                }
                let Some(p1) = self.p1 else {
                    return ToolResult::None;
                };
                state.select(Rectangle::from_points(p0, p1));
                ToolResult::Redraw
            }
            PointerAction::Up => {
                self.reset();
                if moving {
                    log_result(state.commit());
                    return ToolResult::Redraw;
                }
                ToolResult::None
            }
        }
    }

    fn begin_move(&mut self, state: &mut EditState, selection: Rectangle, cursor: Position) {
        self.p0 = Some(cursor);
        self.p1 = Some(selection.top_left());
        let slice = extract(state.grid(), selection);
        state.set_buffer_internal(Some(slice));
        log_result(state.clear(Some(selection)));
    }

    fn escape(&mut self, state: &mut EditState) -> ToolResult {
        if state.buffer().is_some() {
            self.reset();
            log_result(state.commit());
            state.deselect();
            ToolResult::Redraw
        } else if state.selection().is_some() {
            state.deselect();
            ToolResult::Redraw
        } else {
            ToolResult::PopTool
        }
    }
}
