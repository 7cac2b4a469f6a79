use serde::{Deserialize, Serialize};

use crate::{Cell, Grid, Position, Rectangle};

/// A rectangular block of cells taken out of, or headed into, a grid.
///
/// `cells` is row major over `bounds`. A `None` entry is a hole and inserts as
/// an empty cell. A slice with no cells at all is the clear marker and resets
/// every cell in `bounds` to empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub bounds: Rectangle,
    pub cells: Vec<Option<Cell>>,
}

impl Slice {
    /// A slice that clears `bounds` when inserted.
    pub fn clear(bounds: Rectangle) -> Self {
        Self { bounds, cells: Vec::new() }
    }

    /// A slice with a hole at every position, ready to be filled sparsely.
    pub fn sparse(bounds: Rectangle) -> Self {
        Self {
            bounds,
            cells: vec![None; bounds.area()],
        }
    }

    pub fn from_cells(bounds: Rectangle, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), bounds.area());
        Self {
            bounds,
            cells: cells.into_iter().map(Some).collect(),
        }
    }

    /// True for the clear marker.
    pub fn is_clear(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn origin(&self) -> Position {
        self.bounds.top_left()
    }

    pub fn set_origin(&mut self, pos: Position) {
        self.bounds = self.bounds.with_origin(pos);
    }

    pub fn translate(&mut self, delta: Position) {
        self.set_origin(self.origin() + delta);
    }

    fn local_index(&self, local: Position) -> Option<usize> {
        if local.x < 0 || local.y < 0 || local.x >= self.bounds.width || local.y >= self.bounds.height {
            return None;
        }
        Some(local.x as usize + local.y as usize * self.bounds.width as usize)
    }

    /// The cell at a position relative to the slice origin.
    pub fn get(&self, local: impl Into<Position>) -> Option<&Cell> {
        let idx = self.local_index(local.into())?;
        self.cells.get(idx)?.as_ref()
    }

    pub fn set(&mut self, local: impl Into<Position>, cell: Cell) {
        let Some(idx) = self.local_index(local.into()) else {
            return;
        };
        if self.cells.is_empty() {
            self.cells = vec![None; self.bounds.area()];
        }
        self.cells[idx] = Some(cell);
    }

    /// The cell this slice would put at a grid position, if any.
    pub fn cell_at(&self, pos: impl Into<Position>) -> Option<&Cell> {
        self.get(pos.into() - self.origin())
    }

    /// The cell inserting this slice writes at a grid position. Holes and the
    /// clear marker write empty cells. `None` outside `bounds`.
    pub fn written_cell_at(&self, pos: impl Into<Position>) -> Option<Cell> {
        let pos = pos.into();
        if !self.bounds.contains_pt(pos) {
            return None;
        }
        Some(self.cell_at(pos).cloned().unwrap_or_default())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().filter_map(Option::as_mut)
    }
}

/// Copies every cell in `bounds` out of the grid, row by row.
/// Positions outside the grid come back as empty cells.
pub fn extract(grid: &Grid, bounds: Rectangle) -> Slice {
    let mut cells = Vec::with_capacity(bounds.area());
    for y in bounds.y_range() {
        for x in bounds.x_range() {
            cells.push(Some(grid.get_cell((x, y))));
        }
    }
    Slice { bounds, cells }
}

/// Writes `slice` into the grid without any masking.
///
/// Every position in `bounds` is overwritten. Holes, and every position of the
/// clear marker, become empty cells. Destinations outside the grid are dropped
/// silently.
pub fn insert(grid: &mut Grid, slice: &Slice) {
    let bounds = slice.bounds;
    let empty = Cell::empty();
    for j in 0..bounds.height {
        for i in 0..bounds.width {
            let src = slice
                .cells
                .get(i as usize + j as usize * bounds.width as usize)
                .and_then(Option::as_ref)
                .unwrap_or(&empty);
            if let Some(dst) = grid.cell_mut((bounds.x + i, bounds.y + j)) {
                dst.assign(src);
            }
        }
    }
}
