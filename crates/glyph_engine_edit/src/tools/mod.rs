//! Tool state machines
//!
//! Each tool turns a stream of pointer and key events into edits on an
//! [`EditState`]. Exactly one tool is current; a [`ToolStack`] keeps the
//! tools that were active before a temporary switch (e.g. into paste mode).

mod box_drawing;
mod eraser;
mod paste;
mod pen;
mod select;
mod text;

pub use box_drawing::BoxDrawingTool;
pub use eraser::EraserTool;
pub use paste::PasteTool;
pub use pen::PenTool;
pub use select::SelectTool;
pub use text::TextTool;

use glyph_engine::Result;

use crate::{brushes::BoxCharset, EditState, InputEvent};

/// Outcome of feeding one event to a tool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolResult {
    /// Not handled, the event falls through to the global shortcuts
    None,
    /// Handled
    Redraw,
    /// Handled, and the previous tool should become current again
    PopTool,
}

impl ToolResult {
    pub fn is_handled(self) -> bool {
        !matches!(self, ToolResult::None)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tool {
    Pen(PenTool),
    Eraser(EraserTool),
    Text(TextTool),
    Select(SelectTool),
    BoxDrawing(BoxDrawingTool),
    Paste(PasteTool),
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Pen(PenTool)
    }
}

impl Tool {
    pub fn handle_event(&mut self, state: &mut EditState, event: &InputEvent) -> ToolResult {
        match self {
            Tool::Pen(tool) => tool.handle_event(state, event),
            Tool::Eraser(tool) => tool.handle_event(state, event),
            Tool::Text(tool) => tool.handle_event(state, event),
            Tool::Select(tool) => tool.handle_event(state, event),
            Tool::BoxDrawing(tool) => tool.handle_event(state, event),
            Tool::Paste(tool) => tool.handle_event(state, event),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pen(_) => "pen",
            Tool::Eraser(_) => "eraser",
            Tool::Text(_) => "text",
            Tool::Select(_) => "select",
            Tool::BoxDrawing(_) => "box-drawing",
            Tool::Paste(_) => "paste",
        }
    }

    /// Builds a fresh tool from its name. Box drawing uses `charset`.
    pub fn from_name(name: &str, charset: &BoxCharset) -> Option<Tool> {
        let tool = match name {
            "pen" => Tool::Pen(PenTool),
            "eraser" => Tool::Eraser(EraserTool),
            "text" => Tool::Text(TextTool::default()),
            "select" => Tool::Select(SelectTool::default()),
            "box" | "box-drawing" => Tool::BoxDrawing(BoxDrawingTool::new(charset.clone())),
            "paste" => Tool::Paste(PasteTool),
            _ => return None,
        };
        Some(tool)
    }
}

/// The current tool plus the tools to go back to.
#[derive(Clone, Debug, Default)]
pub struct ToolStack {
    current: Tool,
    stack: Vec<Tool>,
}

impl ToolStack {
    pub fn current(&self) -> &Tool {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Tool {
        &mut self.current
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Switches tools for good, forgetting everything on the stack.
    pub fn set_tool(&mut self, tool: Tool) {
        log::debug!("set tool {}", tool.name());
        self.current = tool;
        self.stack.clear();
    }

    /// Switches temporarily; [`ToolStack::pop_tool`] comes back to the current one.
    pub fn push_tool(&mut self, tool: Tool) {
        log::debug!("push tool {} over {}", tool.name(), self.current.name());
        let prev = std::mem::replace(&mut self.current, tool);
        self.stack.push(prev);
    }

    /// Restores the previous tool, the pen when there is none.
    pub fn pop_tool(&mut self) {
        self.current = self.stack.pop().unwrap_or_default();
        log::debug!("pop tool, now {}", self.current.name());
    }
}

/// Tools consume the event even when the edit is rejected.
pub(crate) fn log_result(res: Result<()>) {
    if let Err(err) = res {
        log::warn!("tool edit failed: {err}");
    }
}
