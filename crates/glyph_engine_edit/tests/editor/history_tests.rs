//! Tests for the undo/redo history

use glyph_engine_edit::{Cell, Command, EditState, Rectangle, Slice, UndoState};
use pretty_assertions::assert_eq;

fn glyph_at(state: &EditState, x: i32, y: i32) -> String {
    state.grid().get_cell((x, y)).glyph
}

#[test]
fn test_undo_redo_paint() {
    let mut state = EditState::new(8, 4);
    state.execute(Command::paint(2, 1, Cell::new("x", "red", ""))).unwrap();
    assert_eq!(glyph_at(&state, 2, 1), "x");

    state.undo().unwrap();
    assert_eq!(state.grid().get_cell((2, 1)), Cell::empty());
    assert_eq!(state.undo_stack_len(), 0);
    assert_eq!(state.redo_stack_len(), 1);

    state.redo().unwrap();
    assert_eq!(state.grid().get_cell((2, 1)), Cell::new("x", "red", ""));
    assert_eq!(state.undo_stack_len(), 1);
    assert_eq!(state.redo_stack_len(), 0);
}

#[test]
fn test_new_command_drops_redo_path() {
    let mut state = EditState::new(8, 4);
    state.execute(Command::paint(0, 0, Cell::new("a", "", ""))).unwrap();
    state.execute(Command::paint(1, 0, Cell::new("b", "", ""))).unwrap();
    state.undo().unwrap();
    assert!(state.can_redo());

    state.execute(Command::paint(2, 0, Cell::new("c", "", ""))).unwrap();
    assert!(!state.can_redo());

    // redo on an empty stack changes nothing
    state.redo().unwrap();
    assert_eq!(glyph_at(&state, 1, 0), "");
    assert_eq!(glyph_at(&state, 2, 0), "c");
    assert_eq!(state.undo_stack_len(), 2);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut state = EditState::new(4, 4);
    assert!(!state.can_undo());
    state.undo().unwrap();
    assert_eq!(state.grid().cells().iter().filter(|c| !c.is_empty()).count(), 0);
    assert_eq!(state.redo_stack_len(), 0);
}

#[test]
fn test_blit_round_trip() {
    let mut state = EditState::new(6, 4);
    state.execute(Command::paint(1, 1, Cell::new("q", "blue", "black"))).unwrap();
    let before = state.grid().clone();

    let slice = Slice::from_cells(Rectangle::new(0, 0, 3, 3), vec![Cell::new("#", "white", ""); 9]);
    state.execute(Command::Blit { slice }).unwrap();
    assert_eq!(glyph_at(&state, 1, 1), "#");

    state.undo().unwrap();
    assert_eq!(state.grid(), &before);
}

#[test]
fn test_canvas_color_round_trip() {
    let mut state = EditState::new(4, 4);
    let initial = state.canvas_color().to_string();
    state.set_canvas_color("#000000").unwrap();
    assert_eq!(state.canvas_color(), "#000000");

    state.undo().unwrap();
    assert_eq!(state.canvas_color(), initial);
    state.redo().unwrap();
    assert_eq!(state.canvas_color(), "#000000");
}

#[test]
fn test_resize_undo_restores_dimensions_only() {
    let mut state = EditState::new(4, 4);
    state.execute(Command::paint(3, 3, Cell::new("z", "", ""))).unwrap();
    state.resize(2, 2).unwrap();
    assert_eq!((state.grid().width(), state.grid().height()), (2, 2));

    state.undo().unwrap();
    assert_eq!((state.grid().width(), state.grid().height()), (4, 4));
    assert_eq!(state.grid().get_cell((3, 3)), Cell::empty());
}

#[test]
fn test_rejected_command_leaves_history_untouched() {
    super::init_logging();
    let mut state = EditState::new(4, 4);
    assert!(state.execute(Command::paint(9, 9, Cell::new("x", "", ""))).is_err());
    assert!(state.resize(-1, 2).is_err());
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_failing_undo_keeps_command() {
    super::init_logging();
    let mut state = EditState::new(4, 4);
    let mut snapshot = state.snapshot();
    snapshot.undos.push(Command::paint(10, 10, Cell::empty()));
    state.restore(snapshot).unwrap();

    assert!(state.undo().is_err());
    assert_eq!(state.undo_stack_len(), 1);
    assert_eq!(state.redo_stack_len(), 0);
}

#[test]
fn test_descriptions() {
    let mut state = EditState::new(4, 4);
    assert_eq!(state.undo_description(), None);
    state.set_canvas_color("red").unwrap();
    // the stack holds the inverse
    assert_eq!(state.undo_description().as_deref(), Some("Set canvas color to #171618"));
}
