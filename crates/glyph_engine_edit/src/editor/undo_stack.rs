use serde::{Deserialize, Serialize};

use glyph_engine::Result;

use super::Command;

pub trait UndoState {
    fn undo_description(&self) -> Option<String>;
    fn can_undo(&self) -> bool;
    /// Reverts the most recent command. Does nothing when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Fails if the stored command can't be applied to the current grid. The
    /// command stays on the undo stack in that case.
    fn undo(&mut self) -> Result<()>;

    fn redo_description(&self) -> Option<String>;
    fn can_redo(&self) -> bool;
    /// Reapplies the most recently undone command. Does nothing when there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Fails if the stored command can't be applied to the current grid. The
    /// command stays on the redo stack in that case.
    fn redo(&mut self) -> Result<()>;
}

/// The two history stacks. Both hold the commands that get applied next in
/// their direction, i.e. `undos` holds inverses of what was executed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoStack {
    #[serde(default)]
    undos: Vec<Command>,
    #[serde(default)]
    redos: Vec<Command>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(undos: Vec<Command>, redos: Vec<Command>) -> Self {
        Self { undos, redos }
    }

    /// Records the inverse of a freshly executed command. This branches the
    /// history so the redo stack is dropped.
    pub fn push(&mut self, inverse: Command) {
        self.undos.push(inverse);
        self.redos.clear();
    }

    pub fn push_undo(&mut self, cmd: Command) {
        self.undos.push(cmd);
    }

    pub fn push_redo(&mut self, cmd: Command) {
        self.redos.push(cmd);
    }

    pub fn pop_undo(&mut self) -> Option<Command> {
        self.undos.pop()
    }

    pub fn pop_redo(&mut self) -> Option<Command> {
        self.redos.pop()
    }

    pub fn undo_len(&self) -> usize {
        self.undos.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redos.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undos.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redos.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undos.last().map(Command::description)
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redos.last().map(Command::description)
    }

    pub fn undos(&self) -> &[Command] {
        &self.undos
    }

    pub fn redos(&self) -> &[Command] {
        &self.redos
    }

    pub fn into_parts(self) -> (Vec<Command>, Vec<Command>) {
        (self.undos, self.redos)
    }

    pub fn clear(&mut self) {
        self.undos.clear();
        self.redos.clear();
    }
}
