//! Dense cell storage for one document.

use crate::{Cell, EngineError, Position, Rectangle, Result, Size};

/// A `width × height` array of cells addressed by `x + y * width`.
///
/// The storage is allocated for the full size up front, so every in-bounds
/// position reads as an empty cell until it is painted. Out of bounds
/// positions are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    size: Size,
    cells: Vec<Cell>,
}

impl Grid {
    /// # Panics
    ///
    /// Panics if a dimension is negative.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 0 && height >= 0, "grid size must not be negative: {width}x{height}");
        Self {
            size: Size::new(width, height),
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Builds a grid from a row major cell array.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions are negative or `cells` doesn't hold exactly `width * height` entries.
    pub fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(EngineError::InvalidSize { width, height });
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(EngineError::CellCountMismatch { expected, actual: cells.len() });
        }
        Ok(Self {
            size: Size::new(width, height),
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(0, 0, self.size.width, self.size.height)
    }

    pub fn is_inside(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        pos.x >= 0 && pos.y >= 0 && pos.x < self.size.width && pos.y < self.size.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.x as usize + pos.y as usize * self.size.width as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, pos: impl Into<Position>) -> Option<&Cell> {
        let idx = self.index(pos.into())?;
        self.cells.get(idx)
    }

    pub fn cell_mut(&mut self, pos: impl Into<Position>) -> Option<&mut Cell> {
        let idx = self.index(pos.into())?;
        self.cells.get_mut(idx)
    }

    /// Copy of the cell at `pos`; out of bounds reads as an empty cell.
    pub fn get_cell(&self, pos: impl Into<Position>) -> Cell {
        self.cell(pos).cloned().unwrap_or_default()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Changes the logical dimensions. Cells that are inside both the old and
    /// the new bounds keep their content, everything else is dropped.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is negative.
    pub fn resize(&mut self, width: i32, height: i32) {
        assert!(width >= 0 && height >= 0, "grid size must not be negative: {width}x{height}");
        if width == self.size.width && height == self.size.height {
            return;
        }
        let mut cells = vec![Cell::default(); width as usize * height as usize];
        let keep_w = width.min(self.size.width).max(0) as usize;
        let keep_h = height.min(self.size.height).max(0) as usize;
        let old_w = self.size.width as usize;
        for y in 0..keep_h {
            for x in 0..keep_w {
                std::mem::swap(&mut cells[x + y * width as usize], &mut self.cells[x + y * old_w]);
            }
        }
        log::debug!("resize grid {}x{} -> {}x{}", self.size.width, self.size.height, width, height);
        self.size = Size::new(width, height);
        self.cells = cells;
    }
}
