use glyph_engine_edit::{Editor, Key, KeyEvent, Mask, Modifiers, PointerEvent, Position, Rectangle};
use pretty_assertions::assert_eq;

use super::render;

fn press(editor: &mut Editor, ch: char) -> bool {
    editor.handle_event(KeyEvent::char(ch))
}

#[test]
fn test_navigation_keys() {
    let mut editor = Editor::new(4, 4);
    assert!(press(&mut editor, 'l'));
    assert_eq!(editor.state().cursor(), Some(Position::new(1, 0)));
    press(&mut editor, 'j');
    press(&mut editor, 'j');
    assert_eq!(editor.state().cursor(), Some(Position::new(1, 2)));
    press(&mut editor, 'h');
    press(&mut editor, 'k');
    assert_eq!(editor.state().cursor(), Some(Position::new(0, 1)));

    editor.handle_event(Key::ArrowRight);
    editor.handle_event(Key::ArrowDown);
    assert_eq!(editor.state().cursor(), Some(Position::new(1, 2)));
}

#[test]
fn test_undo_redo_keys() {
    let mut editor = Editor::new(4, 1);
    editor.handle_event(PointerEvent::down((0, 0)));
    editor.handle_event(PointerEvent::up((0, 0)));
    assert_eq!(render(&editor), "o   \n");

    assert!(press(&mut editor, 'u'));
    assert_eq!(render(&editor), "    \n");
    assert!(editor.handle_event(KeyEvent::char('r').with_modifiers(Modifiers::CTRL)));
    assert_eq!(render(&editor), "o   \n");

    editor.handle_event(KeyEvent::char('z').with_modifiers(Modifiers::META));
    assert_eq!(render(&editor), "    \n");
    editor.handle_event(KeyEvent::char('Z').with_modifiers(Modifiers::META | Modifiers::SHIFT));
    assert_eq!(render(&editor), "o   \n");
}

#[test]
fn test_tool_keys() {
    let mut editor = Editor::new(4, 4);
    for (ch, name) in [('e', "eraser"), ('m', "select"), ('r', "box-drawing"), ('p', "pen"), ('t', "text")] {
        assert!(press(&mut editor, ch));
        assert_eq!(editor.current_tool().name(), name);
    }
}

#[test]
fn test_mask_keys() {
    let mut editor = Editor::new(4, 4);
    press(&mut editor, 'G');
    assert_eq!(editor.state().mask(), Mask::GLYPH_ONLY);
    press(&mut editor, 'F');
    assert_eq!(editor.state().mask(), Mask::FOREGROUND_ONLY);
    press(&mut editor, 'b');
    assert_eq!(
        editor.state().mask(),
        Mask {
            glyph: false,
            foreground: true,
            background: true,
        }
    );
    press(&mut editor, 'a');
    assert_eq!(editor.state().mask(), Mask::ALL);
}

#[test]
fn test_swap_colors_and_debug() {
    let mut editor = Editor::new(4, 4);
    editor.state_mut().set_current_background("black");
    assert!(editor.handle_event(KeyEvent::char('C').with_modifiers(Modifiers::SHIFT)));
    assert_eq!(editor.state().current_foreground(), "black");
    assert_eq!(editor.state().current_background(), "white");

    press(&mut editor, 'D');
    assert!(editor.state().settings().debug);
}

#[test]
fn test_enter_fills_selection() {
    let mut editor = Editor::new(3, 2);
    editor.state_mut().select(Rectangle::new(0, 0, 2, 1));
    assert!(editor.handle_event(Key::Enter));
    assert_eq!(render(&editor), "oo \n   \n");
    assert_eq!(editor.state().selection(), None);
}

#[test]
fn test_delete_clears_selection() {
    let mut editor = super::editor_from_text("abc\ndef\n");
    editor.state_mut().select(Rectangle::new(1, 0, 2, 2));
    assert!(editor.handle_event(Key::Backspace));
    assert_eq!(render(&editor), "a  \nd  \n");
    assert_eq!(editor.state().selection(), None);
}

#[test]
fn test_select_all_and_escape() {
    let mut editor = Editor::new(3, 2);
    assert!(editor.handle_event(KeyEvent::char('a').with_modifiers(Modifiers::META)));
    assert_eq!(editor.state().selection(), Some(Rectangle::new(0, 0, 3, 2)));
    assert!(editor.handle_event(Key::Escape));
    assert_eq!(editor.state().selection(), None);
}

#[test]
fn test_copy_cut_keys() {
    let mut editor = super::editor_from_text("abc\n");
    editor.state_mut().set_cursor(1, 0);
    assert!(press(&mut editor, 'y'));
    assert_eq!(editor.state().clipboard().map(|c| c.bounds), Some(Rectangle::new(1, 0, 1, 1)));

    editor.state_mut().set_cursor(2, 0);
    assert!(press(&mut editor, 'x'));
    assert_eq!(render(&editor), "ab \n");
    assert_eq!(editor.state().clipboard().and_then(|c| c.get((0, 0))).map(|c| c.glyph.as_str()), Some("c"));
}

#[test]
fn test_unhandled_keys() {
    let mut editor = Editor::new(3, 2);
    assert!(!editor.handle_event(KeyEvent::char('1').with_modifiers(Modifiers::META)));
    assert!(!press(&mut editor, 'q'));
    assert!(!editor.handle_event(KeyEvent::char('q').with_modifiers(Modifiers::CTRL)));
    assert!(!editor.handle_event(Key::Tab));
}
