//! Global keyboard shortcuts, tried when the current tool left a key alone.

use glyph_engine::Mask;

use crate::{
    tools::{log_result, BoxDrawingTool, EraserTool, PenTool, SelectTool, TextTool, Tool},
    Editor, Key, KeyEvent, UndoState,
};

pub(crate) fn handle_global_shortcut(editor: &mut Editor, event: &KeyEvent) -> bool {
    let meta = event.meta();
    let plain = !meta && !event.ctrl();

    // workspace switching
    if meta && matches!(event.key, Key::Char('0'..='9')) {
        return false;
    }

    let has_selection = editor.state().selection().is_some();
    match event.key {
        Key::Escape if has_selection => {
            editor.state_mut().deselect();
            return true;
        }
        Key::Enter if has_selection => {
            let state = editor.state_mut();
            log_result(state.fill_selection());
            state.deselect();
            return true;
        }
        Key::Escape => {
            editor.pop_tool();
            return true;
        }
        _ => {}
    }

    let Key::Char(ch) = event.key else {
        return handle_navigation(editor, event.key);
    };

    if (meta && event.shift() && matches!(ch, 'z' | 'Z')) || (event.ctrl() && ch == 'r') {
        log_result(editor.state_mut().redo());
        return true;
    }
    if (meta && ch == 'z') || (plain && ch == 'u') {
        log_result(editor.state_mut().undo());
        return true;
    }
    if (meta && ch == 'c') || (plain && ch == 'y') {
        editor.state_mut().copy();
        return true;
    }
    if (meta || plain) && ch == 'x' {
        log_result(editor.state_mut().cut());
        return true;
    }
    if ((meta && ch == 'v') || (plain && ch == 'p')) && editor.state().clipboard().is_some() && editor.state().cursor().is_some() {
        editor.paste();
        return true;
    }
    if meta && ch == 'a' {
        editor.state_mut().select_all();
        return true;
    }
    if !plain {
        return false;
    }

    let state = editor.state_mut();
    match ch {
        'D' => state.toggle_debug(),
        'C' if event.shift() => state.swap_colors(),
        'a' => state.set_mask(Mask::ALL),
        'F' => state.set_mask(Mask::FOREGROUND_ONLY),
        'B' => state.set_mask(Mask::BACKGROUND_ONLY),
        'G' => state.set_mask(Mask::GLYPH_ONLY),
        'f' => state.toggle_foreground_mask(),
        'b' => state.toggle_background_mask(),
        'g' => state.toggle_glyph_mask(),
        'p' => editor.set_tool(Tool::Pen(PenTool)),
        'e' => editor.set_tool(Tool::Eraser(EraserTool)),
        'm' => editor.set_tool(Tool::Select(SelectTool::default())),
        't' => editor.set_tool(Tool::Text(TextTool::default())),
        'r' => {
            let charset = editor.box_charset().clone();
            editor.set_tool(Tool::BoxDrawing(BoxDrawingTool::new(charset)));
        }
        'h' => return handle_navigation(editor, Key::ArrowLeft),
        'j' => return handle_navigation(editor, Key::ArrowDown),
        'k' => return handle_navigation(editor, Key::ArrowUp),
        'l' => return handle_navigation(editor, Key::ArrowRight),
        _ => return false,
    }
    true
}

fn handle_navigation(editor: &mut Editor, key: Key) -> bool {
    let state = editor.state_mut();
    // an unset cursor starts from the origin
    let cursor = state.cursor().unwrap_or_default();
    match key {
        Key::ArrowLeft => state.set_cursor(cursor.x - 1, cursor.y),
        Key::ArrowRight => state.set_cursor(cursor.x + 1, cursor.y),
        Key::ArrowUp => state.set_cursor(cursor.x, cursor.y - 1),
        Key::ArrowDown => state.set_cursor(cursor.x, cursor.y + 1),
        Key::Backspace | Key::Delete => log_result(state.clear(None)),
        _ => return false,
    }
    true
}
