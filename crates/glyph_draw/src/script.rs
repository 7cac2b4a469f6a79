//! Line oriented input scripts
//!
//! ```text
//! # draw a box
//! tool box
//! down 0 0
//! move 4 2
//! up 4 2
//! key z meta
//! ```

use glyph_engine_edit::{Editor, Key, KeyEvent, Modifiers, MouseButtons, PointerAction, PointerEvent, Position, UndoState};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl ScriptError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self { line, message: message.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptLine {
    Pointer {
        action: PointerAction,
        position: Position,
        modifiers: Modifiers,
    },
    Key(KeyEvent),
    Tool(String),
    Undo,
    Redo,
}

/// Parses a whole script. Blank lines and lines starting with `#` are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut result = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line_number = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        result.push(parse_line(line).map_err(|message| ScriptError::new(line_number, message))?);
    }
    Ok(result)
}

fn parse_line(line: &str) -> Result<ScriptLine, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("empty line".to_string());
    };
    let args: Vec<&str> = words.collect();

    match verb {
        "down" | "move" | "up" => {
            let action = match verb {
                "down" => PointerAction::Down,
                "move" => PointerAction::Move,
                _ => PointerAction::Up,
            };
            let [x, y, mods @ ..] = args.as_slice() else {
                return Err(format!("'{verb}' needs X and Y"));
            };
            let position = Position::new(parse_coord(x)?, parse_coord(y)?);
            Ok(ScriptLine::Pointer {
                action,
                position,
                modifiers: parse_modifiers(mods)?,
            })
        }
        "key" => {
            let [name, mods @ ..] = args.as_slice() else {
                return Err("'key' needs a key name".to_string());
            };
            let key = Key::from_name(name).ok_or_else(|| format!("unknown key '{name}'"))?;
            Ok(ScriptLine::Key(KeyEvent::new(key).with_modifiers(parse_modifiers(mods)?)))
        }
        "tool" => match args.as_slice() {
            [name] => Ok(ScriptLine::Tool((*name).to_string())),
            _ => Err("'tool' needs exactly one name".to_string()),
        },
        "undo" | "redo" if args.is_empty() => Ok(if verb == "undo" { ScriptLine::Undo } else { ScriptLine::Redo }),
        "undo" | "redo" => Err(format!("'{verb}' takes no arguments")),
        _ => Err(format!("unknown command '{verb}'")),
    }
}

fn parse_coord(word: &str) -> Result<i32, String> {
    word.parse().map_err(|_| format!("'{word}' is not a coordinate"))
}

fn parse_modifiers(words: &[&str]) -> Result<Modifiers, String> {
    let mut modifiers = Modifiers::empty();
    for word in words {
        modifiers |= match word.to_ascii_lowercase().as_str() {
            "shift" => Modifiers::SHIFT,
            "ctrl" | "control" => Modifiers::CTRL,
            "alt" | "option" => Modifiers::ALT,
            "meta" | "cmd" => Modifiers::META,
            _ => return Err(format!("unknown modifier '{word}'")),
        };
    }
    Ok(modifiers)
}

/// Feeds parsed script lines to an editor.
///
/// `move` lines drag while a `down` is pending and hover otherwise.
#[derive(Debug, Default)]
pub struct Replay {
    pressed: bool,
    handled: usize,
}

impl Replay {
    /// Number of events something handled so far.
    pub fn handled(&self) -> usize {
        self.handled
    }

    pub fn run(&mut self, editor: &mut Editor, lines: &[ScriptLine]) -> anyhow::Result<()> {
        for line in lines {
            self.step(editor, line)?;
        }
        Ok(())
    }

    pub fn step(&mut self, editor: &mut Editor, line: &ScriptLine) -> anyhow::Result<()> {
        let handled = match line {
            ScriptLine::Pointer { action, position, modifiers } => {
                let buttons = match action {
                    PointerAction::Down => MouseButtons::PRIMARY,
                    PointerAction::Move if self.pressed => MouseButtons::PRIMARY,
                    PointerAction::Move | PointerAction::Up => MouseButtons::empty(),
                };
                self.pressed = *action == PointerAction::Down || (self.pressed && *action == PointerAction::Move);
                let event = PointerEvent::new(*action, *position, buttons).with_modifiers(*modifiers);
                editor.handle_event(event)
            }
            ScriptLine::Key(key) => editor.handle_event(*key),
            ScriptLine::Tool(name) => {
                if !editor.set_tool_by_name(name) {
                    anyhow::bail!("unknown tool '{name}'");
                }
                true
            }
            ScriptLine::Undo => {
                editor.state_mut().undo()?;
                true
            }
            ScriptLine::Redo => {
                editor.state_mut().redo()?;
                true
            }
        };
        log::debug!("{line:?} handled: {handled}");
        if handled {
            self.handled += 1;
        }
        Ok(())
    }
}
