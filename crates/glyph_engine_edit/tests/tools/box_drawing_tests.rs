use glyph_engine_edit::{brushes::BoxCharset, Key, PointerEvent, UndoState};
use pretty_assertions::assert_eq;

use super::{editor_from_text, render};

#[test]
fn test_drag_box() {
    let mut editor = glyph_engine_edit::Editor::new(5, 3);
    assert!(editor.set_tool_by_name("box"));

    editor.handle_event(PointerEvent::down((0, 0)));
    editor.handle_event(PointerEvent::drag((4, 2)));
    // only a preview so far
    assert_eq!(editor.state().preview_cell_at((0, 0)).glyph, "┌");
    assert_eq!(render(&editor), "     \n     \n     \n");

    editor.handle_event(PointerEvent::up((4, 2)));
    assert_eq!(render(&editor), "┌───┐\n│   │\n└───┘\n");
    assert_eq!(editor.state().undo_stack_len(), 1);
    assert!(editor.state().buffer().is_none());
}

#[test]
fn test_box_clears_interior() {
    let mut editor = editor_from_text("xxxxx\nxxxxx\nxxxxx\n");
    editor.set_tool_by_name("box");
    editor.handle_event(PointerEvent::down((4, 2)));
    editor.handle_event(PointerEvent::drag((0, 0)));
    assert!(editor.state().preview_cell_at((2, 1)).is_empty());
    editor.handle_event(PointerEvent::up((0, 0)));
    assert_eq!(render(&editor), "┌───┐\n│   │\n└───┘\n");

    editor.state_mut().undo().unwrap();
    assert_eq!(render(&editor), "xxxxx\nxxxxx\nxxxxx\n");
}

#[test]
fn test_hover_is_consumed() {
    let mut editor = glyph_engine_edit::Editor::new(4, 4);
    editor.set_tool_by_name("box");
    assert!(editor.handle_event(PointerEvent::hover((1, 1))));
    assert!(editor.state().buffer().is_none());
    assert_eq!(editor.state().cursor(), Some(glyph_engine_edit::Position::new(1, 1)));
    assert_eq!(editor.current_tool().name(), "box");
}

#[test]
fn test_escape_discards_preview() {
    let mut editor = glyph_engine_edit::Editor::new(4, 4);
    editor.set_tool_by_name("box");
    editor.handle_event(PointerEvent::down((0, 0)));
    editor.handle_event(PointerEvent::drag((2, 2)));
    assert!(editor.handle_event(Key::Escape));

    assert!(editor.state().buffer().is_none());
    assert_eq!(editor.current_tool().name(), "pen");
    assert_eq!(editor.state().undo_stack_len(), 0);
}

#[test]
fn test_custom_charset() {
    let mut editor = glyph_engine_edit::Editor::new(3, 3);
    editor.set_box_charset(BoxCharset::new("+-+|+-+").unwrap());
    editor.set_tool_by_name("box");
    editor.handle_event(PointerEvent::down((0, 0)));
    editor.handle_event(PointerEvent::up((2, 2)));
    assert_eq!(render(&editor), "+-+\n| |\n+-+\n");
}

#[test]
fn test_single_row_box() {
    let mut editor = glyph_engine_edit::Editor::new(4, 1);
    editor.set_tool_by_name("box");
    editor.handle_event(PointerEvent::down((0, 0)));
    editor.handle_event(PointerEvent::up((3, 0)));
    assert_eq!(render(&editor), "└──┘\n");
}
