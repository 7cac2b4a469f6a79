use glyph_engine::Cell;

use crate::{Command, EditState, InputEvent, Key, PointerAction};

use super::{log_result, ToolResult};

/// Typing mode. While a cursor is set every key is consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextTool {
    /// Column that Enter returns to
    pub home_x: i32,
}

impl TextTool {
    pub fn handle_event(&mut self, state: &mut EditState, event: &InputEvent) -> ToolResult {
        let key = match event {
            InputEvent::Pointer(pointer) => {
                if pointer.action != PointerAction::Down {
                    return ToolResult::None;
                }
                let Some(cursor) = state.cursor() else {
                    return ToolResult::None;
                };
                self.home_x = cursor.x;
                return ToolResult::Redraw;
            }
            InputEvent::Key(key) => key,
        };
        let Some(cursor) = state.cursor() else {
            return ToolResult::None;
        };

        match key.key {
            Key::Escape => return ToolResult::PopTool,
            Key::Backspace => {
                log_result(state.erase());
                state.set_cursor(cursor.x - 1, cursor.y);
            }
            Key::Enter => state.set_cursor(self.home_x, cursor.y + 1),
            Key::ArrowLeft => state.set_cursor(cursor.x - 1, cursor.y),
            Key::ArrowRight => state.set_cursor(cursor.x + 1, cursor.y),
            Key::ArrowUp => state.set_cursor(cursor.x, cursor.y - 1),
            Key::ArrowDown => state.set_cursor(cursor.x, cursor.y + 1),
            Key::Char(ch) if !key.ctrl() && !key.meta() => {
                let mask = state.mask();
                let cell = state.grid().get_cell(cursor);
                let typed = Cell::new(
                    ch.to_string(),
                    if mask.foreground { state.current_foreground() } else { cell.foreground.as_str() },
                    if mask.background { state.current_background() } else { cell.background.as_str() },
                );
                log_result(state.execute(Command::paint(cursor.x, cursor.y, typed)));
                state.set_cursor(cursor.x + 1, cursor.y);
            }
            _ => {}
        }
        ToolResult::Redraw
    }
}
