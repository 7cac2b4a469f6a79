//! Plain text import and export.

use crate::{Cell, Grid, Rectangle, Slice};

pub const IMPORT_FOREGROUND: &str = "white";

/// One line per row, each terminated by `\n`. Empty glyphs become spaces.
pub fn render_to_text(grid: &Grid) -> String {
    let mut result = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            match grid.cell((x, y)) {
                Some(cell) if !cell.glyph.is_empty() => result.push_str(&cell.glyph),
                _ => result.push(' '),
            }
        }
        result.push('\n');
    }
    result
}

/// Turns text into a slice at the origin, one row per line.
///
/// The width is the longest line counted in chars. Positions past the end of
/// a shorter line get an empty glyph. A single trailing newline does not start
/// another row, and `\r\n` line endings are accepted.
pub fn parse_text(text: &str) -> Slice {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let lines: Vec<Vec<char>> = text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l).chars().collect()).collect();
    let width = lines.iter().map(Vec::len).max().unwrap_or(0) as i32;
    let height = lines.len() as i32;

    let mut cells = Vec::with_capacity(width as usize * height as usize);
    for line in &lines {
        for x in 0..width as usize {
            let glyph = line.get(x).map(char::to_string).unwrap_or_default();
            cells.push(Cell::new(glyph, IMPORT_FOREGROUND, ""));
        }
    }
    Slice::from_cells(Rectangle::new(0, 0, width, height), cells)
}
