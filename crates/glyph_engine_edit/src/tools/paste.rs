use glyph_engine::Position;

use crate::{EditState, InputEvent, Key, PointerAction};

use super::{log_result, ToolResult};

/// Places the staged buffer. Only active while there is a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasteTool;

impl PasteTool {
    pub fn handle_event(&mut self, state: &mut EditState, event: &InputEvent) -> ToolResult {
        let Some(origin) = state.buffer().map(|b| b.origin()) else {
            return ToolResult::None;
        };

        match event {
            InputEvent::Pointer(pointer) => match pointer.action {
                PointerAction::Down => {
                    log_result(state.commit());
                    ToolResult::PopTool
                }
                PointerAction::Move => {
                    state.move_buffer_internal(pointer.position, true);
                    ToolResult::Redraw
                }
                PointerAction::Up => ToolResult::None,
            },
            InputEvent::Key(key) => {
                let delta = match key.key {
                    Key::Enter => {
                        log_result(state.commit());
                        return ToolResult::PopTool;
                    }
                    Key::Escape => {
                        state.discard_buffer();
                        state.deselect();
                        return ToolResult::PopTool;
                    }
                    Key::ArrowLeft | Key::Char('h') => Position::new(-1, 0),
                    Key::ArrowRight | Key::Char('l') => Position::new(1, 0),
                    Key::ArrowUp | Key::Char('k') => Position::new(0, -1),
                    Key::ArrowDown | Key::Char('j') => Position::new(0, 1),
                    _ => return ToolResult::None,
                };
                state.move_buffer_internal(origin + delta, true);
                ToolResult::Redraw
            }
        }
    }
}
