use serde::{Deserialize, Serialize};

use crate::Position;

/// An axis aligned region of cells, `width`/`height` counted in cells.
///
/// A rectangle with a zero extent is an empty region. Negative extents are never valid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "w")]
    pub width: i32,
    #[serde(rename = "h")]
    pub height: i32,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x:{}, y:{}, width: {}, height: {})", self.x, self.y, self.width, self.height)
    }
}

impl Rectangle {
    /// # Panics
    ///
    /// Panics if `width` or `height` is negative.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        assert!(width >= 0 && height >= 0, "rectangle extent must not be negative: {width}x{height}");
        Self { x, y, width, height }
    }

    pub fn from_min_size(pos: impl Into<Position>, width: i32, height: i32) -> Self {
        let pos = pos.into();
        Self::new(pos.x, pos.y, width, height)
    }

    /// Smallest rectangle containing both points, both corners inclusive.
    pub fn from_points(p0: Position, p1: Position) -> Self {
        let min = p0.min(p1);
        let max = p0.max(p1);
        Rectangle {
            x: min.x,
            y: min.y,
            width: max.x - min.x + 1,
            height: max.y - min.y + 1,
        }
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Exclusive bottom right corner.
    pub fn bottom_right(&self) -> Position {
        Position::new(self.x + self.width, self.y + self.height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn area(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn is_valid(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    pub fn contains_pt(&self, point: Position) -> bool {
        self.contains(point.x, point.y)
    }

    pub fn with_origin(self, pos: Position) -> Rectangle {
        Rectangle { x: pos.x, y: pos.y, ..self }
    }

    pub fn x_range(&self) -> std::ops::Range<i32> {
        self.x..self.right()
    }

    pub fn y_range(&self) -> std::ops::Range<i32> {
        self.y..self.bottom()
    }
}
