//! Event dispatch for one open document

use glyph_engine::{Result, Slice};

use crate::{
    brushes::BoxCharset,
    shortcuts,
    tools::{PasteTool, Tool, ToolResult, ToolStack},
    EditState, InputEvent, Snapshot,
};

/// An [`EditState`] together with the tools driving it.
///
/// Pointer events move the cursor first, then go to the current tool. Key
/// events the tool doesn't handle are tried against the global shortcuts.
#[derive(Clone, Debug, Default)]
pub struct Editor {
    state: EditState,
    tools: ToolStack,
    box_charset: BoxCharset,
}

impl Editor {
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_state(EditState::new(width, height))
    }

    pub fn from_state(state: EditState) -> Self {
        Self {
            state,
            tools: ToolStack::default(),
            box_charset: BoxCharset::default(),
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditState {
        &mut self.state
    }

    pub fn current_tool(&self) -> &Tool {
        self.tools.current()
    }

    pub fn tools(&self) -> &ToolStack {
        &self.tools
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.set_tool(tool);
        self.state.request_repaint();
    }

    pub fn push_tool(&mut self, tool: Tool) {
        self.tools.push_tool(tool);
        self.state.request_repaint();
    }

    pub fn pop_tool(&mut self) {
        self.tools.pop_tool();
        self.state.request_repaint();
    }

    /// Switches to the tool called `name`. Returns false for unknown names.
    pub fn set_tool_by_name(&mut self, name: &str) -> bool {
        match Tool::from_name(name, &self.box_charset) {
            Some(tool) => {
                self.set_tool(tool);
                true
            }
            None => false,
        }
    }

    pub fn box_charset(&self) -> &BoxCharset {
        &self.box_charset
    }

    /// Charset for box drawing tools created from now on.
    pub fn set_box_charset(&mut self, charset: BoxCharset) {
        self.box_charset = charset;
    }

    /// Feeds one event through the current tool and, for unhandled keys, the
    /// global shortcuts. Returns whether anything handled it.
    pub fn handle_event(&mut self, event: impl Into<InputEvent>) -> bool {
        let event = event.into();
        if let InputEvent::Pointer(pointer) = &event {
            self.state.set_cursor(pointer.position.x, pointer.position.y);
        }

        let result = self.tools.current_mut().handle_event(&mut self.state, &event);
        if result == ToolResult::PopTool {
            self.tools.pop_tool();
        }
        if result.is_handled() {
            self.state.request_repaint();
            return true;
        }

        match event {
            InputEvent::Key(key) => shortcuts::handle_global_shortcut(self, &key),
            InputEvent::Pointer(_) => false,
        }
    }

    /// Stages the clipboard at the cursor, or where it was copied from when
    /// there is no cursor, and enters paste mode.
    pub fn paste(&mut self) {
        let Some(clipboard) = self.state.clipboard() else {
            return;
        };
        let origin = self.state.cursor().unwrap_or_else(|| clipboard.origin());
        let mut buffer = clipboard.clone();
        buffer.set_origin(origin);
        self.state.stage_buffer(buffer);
        self.push_tool(Tool::Paste(PasteTool));
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Replaces the document with `snapshot`. Gestures in progress are dropped
    /// and the pen becomes current.
    ///
    /// # Errors
    ///
    /// See [`EditState::restore`].
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        self.state.restore(snapshot)?;
        self.tools.set_tool(Tool::default());
        Ok(())
    }

    pub fn import_slice(&mut self, slice: &Slice) {
        self.state.import_slice(slice);
        self.tools.set_tool(Tool::default());
    }
}
