use crate::{EditState, InputEvent, Modifiers};

use super::{log_result, ToolResult};

/// Paints the brush under the pointer. Alt samples the cell instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PenTool;

impl PenTool {
    pub fn handle_event(&mut self, state: &mut EditState, event: &InputEvent) -> ToolResult {
        let InputEvent::Pointer(pointer) = event else {
            return ToolResult::None;
        };
        if !pointer.is_primary() || !pointer.on_canvas {
            return ToolResult::None;
        }
        if pointer.modifiers.contains(Modifiers::ALT) {
            state.sample(pointer.position);
            return ToolResult::Redraw;
        }
        log_result(state.paint());
        ToolResult::Redraw
    }
}
