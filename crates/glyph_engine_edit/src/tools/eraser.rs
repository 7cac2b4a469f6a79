use crate::{EditState, InputEvent};

use super::{log_result, ToolResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EraserTool;

impl EraserTool {
    pub fn handle_event(&mut self, state: &mut EditState, event: &InputEvent) -> ToolResult {
        let InputEvent::Pointer(pointer) = event else {
            return ToolResult::None;
        };
        if !pointer.is_primary() || !pointer.on_canvas {
            return ToolResult::None;
        }
        log_result(state.erase());
        ToolResult::Redraw
    }
}
