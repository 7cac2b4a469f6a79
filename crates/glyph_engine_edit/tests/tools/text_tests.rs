use glyph_engine_edit::{Cell, Command, Editor, Key, KeyEvent, Mask, Modifiers, PointerEvent, Position};
use pretty_assertions::assert_eq;

use super::render;

fn type_str(editor: &mut Editor, text: &str) {
    for ch in text.chars() {
        editor.handle_event(KeyEvent::char(ch));
    }
}

#[test]
fn test_typing_enter_and_backspace() {
    let mut editor = Editor::new(6, 2);
    editor.set_tool_by_name("text");
    editor.handle_event(PointerEvent::down((2, 0)));

    type_str(&mut editor, "hi");
    assert_eq!(editor.state().cursor(), Some(Position::new(4, 0)));

    editor.handle_event(Key::Enter);
    assert_eq!(editor.state().cursor(), Some(Position::new(2, 1)));

    type_str(&mut editor, "x");
    // the cell left of the cursor stays until the cursor is on it
    editor.handle_event(Key::Backspace);
    assert_eq!(editor.state().grid().get_cell((2, 1)).glyph, "x");
    editor.handle_event(Key::Backspace);
    assert_eq!(editor.state().cursor(), Some(Position::new(1, 1)));

    assert_eq!(render(&editor), "  hi  \n      \n");
    assert_eq!(editor.state().undo_stack_len(), 4);
}

#[test]
fn test_typed_cells_use_foreground() {
    let mut editor = Editor::new(3, 1);
    editor.state_mut().set_current_foreground("lime");
    editor.set_tool_by_name("text");
    editor.handle_event(PointerEvent::down((0, 0)));
    type_str(&mut editor, "a");
    assert_eq!(editor.state().grid().get_cell((0, 0)), Cell::new("a", "lime", ""));
}

#[test]
fn test_typing_respects_mask() {
    let mut editor = Editor::new(3, 1);
    editor
        .state_mut()
        .execute(Command::paint(0, 0, Cell::new("z", "red", "blue")))
        .unwrap();
    editor.state_mut().set_mask(Mask::GLYPH_ONLY);
    editor.set_tool_by_name("text");
    editor.handle_event(PointerEvent::down((0, 0)));
    type_str(&mut editor, "q");
    assert_eq!(editor.state().grid().get_cell((0, 0)), Cell::new("q", "red", "blue"));
}

#[test]
fn test_letters_are_typed_not_shortcuts() {
    let mut editor = Editor::new(4, 1);
    editor.set_tool_by_name("text");
    editor.handle_event(PointerEvent::down((0, 0)));
    type_str(&mut editor, "ue");
    assert_eq!(editor.current_tool().name(), "text");
    assert_eq!(render(&editor), "ue  \n");
}

#[test]
fn test_meta_keys_are_not_typed() {
    let mut editor = Editor::new(4, 1);
    editor.set_tool_by_name("text");
    editor.handle_event(PointerEvent::down((0, 0)));
    editor.handle_event(KeyEvent::char('z').with_modifiers(Modifiers::META));
    assert_eq!(render(&editor), "    \n");
    assert_eq!(editor.state().cursor(), Some(Position::new(0, 0)));
}

#[test]
fn test_keys_fall_through_without_cursor() {
    let mut editor = Editor::new(4, 1);
    editor.set_tool_by_name("text");
    assert!(editor.handle_event(KeyEvent::char('e')));
    assert_eq!(editor.current_tool().name(), "eraser");
}

#[test]
fn test_escape_leaves_text_mode() {
    let mut editor = Editor::new(4, 1);
    editor.set_tool_by_name("text");
    editor.handle_event(PointerEvent::down((0, 0)));
    assert!(editor.handle_event(Key::Escape));
    assert_eq!(editor.current_tool().name(), "pen");
}
