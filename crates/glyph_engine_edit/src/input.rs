//! Normalized input events as handed over by the input dispatcher.

use bitflags::bitflags;

use glyph_engine::Position;

bitflags! {
    /// Pointer buttons held during an event, numbered like DOM `buttons`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        const PRIMARY = 1 << 0;
        const SECONDARY = 1 << 1;
        const AUXILIARY = 1 << 2;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub action: PointerAction,
    /// Cell coordinate, already projected from screen space. May lie off the grid.
    pub position: Position,
    pub buttons: MouseButtons,
    pub modifiers: Modifiers,
    /// False when the pointer targets UI chrome rather than the drawing surface
    pub on_canvas: bool,
}

impl PointerEvent {
    pub fn new(action: PointerAction, position: impl Into<Position>, buttons: MouseButtons) -> Self {
        Self {
            action,
            position: position.into(),
            buttons,
            modifiers: Modifiers::empty(),
            on_canvas: true,
        }
    }

    /// Primary button pressed.
    pub fn down(position: impl Into<Position>) -> Self {
        Self::new(PointerAction::Down, position, MouseButtons::PRIMARY)
    }

    /// Move with the primary button held.
    pub fn drag(position: impl Into<Position>) -> Self {
        Self::new(PointerAction::Move, position, MouseButtons::PRIMARY)
    }

    /// Move without any button held.
    pub fn hover(position: impl Into<Position>) -> Self {
        Self::new(PointerAction::Move, position, MouseButtons::empty())
    }

    /// Primary button released.
    pub fn up(position: impl Into<Position>) -> Self {
        Self::new(PointerAction::Up, position, MouseButtons::empty())
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn off_canvas(mut self) -> Self {
        self.on_canvas = false;
        self
    }

    /// Exactly the primary button is held.
    pub fn is_primary(&self) -> bool {
        self.buttons == MouseButtons::PRIMARY
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Backspace,
    Delete,
    Tab,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Char(char),
}

impl Key {
    /// Parses a DOM style key name, `Escape`, `ArrowLeft`, or a single character.
    pub fn from_name(name: &str) -> Option<Key> {
        let key = match name {
            "Escape" | "Esc" => Key::Escape,
            "Enter" | "Return" => Key::Enter,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Tab" => Key::Tab,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Space" => Key::Char(' '),
            _ => {
                let mut chars = name.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                Key::Char(ch)
            }
        };
        Some(key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    pub fn char(ch: char) -> Self {
        Self::new(Key::Char(ch))
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    pub fn meta(&self) -> bool {
        self.modifiers.contains(Modifiers::META)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
}

impl From<PointerEvent> for InputEvent {
    fn from(value: PointerEvent) -> Self {
        InputEvent::Pointer(value)
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(value: KeyEvent) -> Self {
        InputEvent::Key(value)
    }
}

impl From<Key> for InputEvent {
    fn from(value: Key) -> Self {
        InputEvent::Key(KeyEvent::new(value))
    }
}
