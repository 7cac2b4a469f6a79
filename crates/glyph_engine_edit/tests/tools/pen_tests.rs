use glyph_engine_edit::{tools::Tool, Cell, Editor, Modifiers, MouseButtons, PointerAction, PointerEvent, Position};
use pretty_assertions::assert_eq;

use super::render;

#[test]
fn test_pen_paints_along_drag() {
    let mut editor = Editor::new(5, 1);
    assert!(editor.handle_event(PointerEvent::down((0, 0))));
    assert!(editor.handle_event(PointerEvent::drag((1, 0))));
    assert!(editor.handle_event(PointerEvent::drag((2, 0))));
    editor.handle_event(PointerEvent::up((2, 0)));

    assert_eq!(render(&editor), "ooo  \n");
    assert_eq!(editor.state().undo_stack_len(), 3);
}

#[test]
fn test_pen_hover_moves_cursor_only() {
    let mut editor = Editor::new(5, 5);
    assert!(!editor.handle_event(PointerEvent::hover((3, 4))));
    assert_eq!(editor.state().cursor(), Some(Position::new(3, 4)));
    assert_eq!(editor.state().undo_stack_len(), 0);
}

#[test]
fn test_pen_ignores_secondary_button_and_chrome() {
    let mut editor = Editor::new(5, 5);
    let secondary = PointerEvent::new(PointerAction::Down, (1, 1), MouseButtons::SECONDARY);
    assert!(!editor.handle_event(secondary));
    assert!(!editor.handle_event(PointerEvent::down((1, 1)).off_canvas()));
    assert_eq!(editor.state().undo_stack_len(), 0);
}

#[test]
fn test_pen_alt_samples() {
    let mut editor = super::editor_from_text("q\n");
    editor.handle_event(PointerEvent::down((0, 0)).with_modifiers(Modifiers::ALT));
    assert_eq!(editor.state().brush(), Cell::new("q", "white", ""));
    assert_eq!(editor.state().undo_stack_len(), 0);
}

#[test]
fn test_eraser() {
    let mut editor = super::editor_from_text("abc\n");
    assert!(editor.set_tool_by_name("eraser"));
    editor.handle_event(PointerEvent::down((1, 0)));
    assert_eq!(render(&editor), "a c\n");
    assert_eq!(editor.state().undo_stack_len(), 1);
    assert_eq!(editor.current_tool().name(), "eraser");
    assert!(!matches!(editor.current_tool(), Tool::Pen(_)));
}
