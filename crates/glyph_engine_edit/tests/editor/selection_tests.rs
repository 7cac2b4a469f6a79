//! Tests for selection, clipboard and the staged buffer

use glyph_engine_edit::{Cell, Command, EditState, Position, Rectangle, Slice, UndoState};
use pretty_assertions::assert_eq;

fn letters_state() -> EditState {
    let mut state = EditState::new(6, 4);
    state.import_slice(&glyph_engine::parse_text("abcdef\nghijkl\nmnopqr\nstuvwx\n"));
    state
}

#[test]
fn test_select_all() {
    let mut state = EditState::new(7, 3);
    state.select_all();
    assert_eq!(state.selection(), Some(Rectangle::new(0, 0, 7, 3)));
    state.deselect();
    assert_eq!(state.selection(), None);
}

#[test]
fn test_copy_selection() {
    let mut state = letters_state();
    state.select(Rectangle::new(1, 1, 2, 2));
    state.copy();

    let clipboard = state.clipboard().unwrap();
    assert_eq!(clipboard.bounds, Rectangle::new(1, 1, 2, 2));
    assert_eq!(clipboard.get((0, 0)).unwrap().glyph, "h");
    assert_eq!(clipboard.get((1, 1)).unwrap().glyph, "o");
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_copy_cell_under_cursor() {
    let mut state = letters_state();
    state.set_cursor(5, 3);
    state.copy();
    let clipboard = state.clipboard().unwrap();
    assert_eq!(clipboard.bounds, Rectangle::new(5, 3, 1, 1));
    assert_eq!(clipboard.get((0, 0)).unwrap().glyph, "x");
}

#[test]
fn test_copy_without_selection_or_cursor_is_noop() {
    let mut state = letters_state();
    state.copy();
    assert!(state.clipboard().is_none());
}

#[test]
fn test_cut_clears_copied_region() {
    let mut state = letters_state();
    state.select(Rectangle::new(0, 0, 2, 1));
    state.cut().unwrap();

    assert_eq!(state.clipboard().unwrap().get((1, 0)).unwrap().glyph, "b");
    assert_eq!(state.grid().get_cell((0, 0)), Cell::empty());
    assert_eq!(state.grid().get_cell((2, 0)).glyph, "c");
    assert_eq!(state.selection(), None);
    assert_eq!(state.undo_stack_len(), 1);
}

#[test]
fn test_cut_at_cursor_leaves_rest_of_grid() {
    let mut state = letters_state();
    state.set_cursor(2, 2);
    state.cut().unwrap();
    assert_eq!(state.grid().get_cell((2, 2)), Cell::empty());
    assert_eq!(state.grid().get_cell((3, 2)).glyph, "p");
}

#[test]
fn test_stage_and_commit_buffer() {
    let mut state = EditState::new(6, 4);
    let slice = Slice::from_cells(Rectangle::new(2, 1, 2, 1), vec![Cell::new("<", "", ""), Cell::new(">", "", "")]);
    state.stage_buffer(slice);
    assert_eq!(state.selection(), Some(Rectangle::new(2, 1, 2, 1)));

    // the buffer is only a preview until committed
    assert_eq!(state.grid().get_cell((2, 1)), Cell::empty());
    assert_eq!(state.preview_cell_at((3, 1)).glyph, ">");
    assert_eq!(state.preview_cell_at((0, 0)), Cell::empty());

    state.commit().unwrap();
    assert_eq!(state.grid().get_cell((2, 1)).glyph, "<");
    assert!(state.buffer().is_none());
    assert_eq!(state.selection(), None);
    assert_eq!(state.undo_stack_len(), 1);

    state.undo().unwrap();
    assert_eq!(state.grid().get_cell((2, 1)), Cell::empty());
}

#[test]
fn test_commit_without_buffer_is_noop() {
    let mut state = EditState::new(4, 4);
    state.commit().unwrap();
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_discard_buffer() {
    let mut state = EditState::new(4, 4);
    state.stage_buffer(Slice::from_cells(Rectangle::new(0, 0, 1, 1), vec![Cell::new("z", "", "")]));
    state.discard_buffer();
    assert!(state.buffer().is_none());
    assert_eq!(state.grid().get_cell((0, 0)), Cell::empty());
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_sparse_buffer_empties_holes() {
    let mut state = EditState::new(3, 1);
    state.execute(Command::paint(1, 0, Cell::new("m", "", ""))).unwrap();

    let mut slice = Slice::sparse(Rectangle::new(0, 0, 3, 1));
    slice.set((0, 0), Cell::new("[", "", ""));
    slice.set((2, 0), Cell::new("]", "", ""));
    state.stage_buffer(slice);
    assert_eq!(state.preview_cell_at(Position::new(1, 0)), Cell::empty());

    state.commit().unwrap();
    assert_eq!(glyph_engine::render_to_text(state.grid()), "[ ]\n");

    state.undo().unwrap();
    assert_eq!(glyph_engine::render_to_text(state.grid()), " m \n");
}
