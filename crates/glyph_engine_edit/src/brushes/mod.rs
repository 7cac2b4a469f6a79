//! Drawing primitives that work on any cell target
//!
//! The algorithms only talk to a [`DrawTarget`], so they can be tested
//! without a grid and reused for previews that live in a slice.
//!
//! # Example
//! ```ignore
//! use glyph_engine_edit::brushes::{BoxCharset, box_drawing::draw_box};
//! use glyph_engine::Rectangle;
//!
//! let charset = BoxCharset::default();
//! let mut target = MyDrawTarget::new();
//! draw_box(&mut target, &charset, Rectangle::new(0, 0, 5, 3));
//! ```

pub mod box_drawing;

pub use box_drawing::{draw_box, BoxCharset, DEFAULT_BOX_CHARSET};

use glyph_engine::Position;

/// Where a traced point sits on the outline of a shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointRole {
    /// Northwest corner (top-left)
    NWCorner,
    /// Northeast corner (top-right)
    NECorner,
    /// Southwest corner (bottom-left)
    SWCorner,
    /// Southeast corner (bottom-right)
    SECorner,
    LeftSide,
    RightSide,
    TopSide,
    BottomSide,
}

/// A trait for targets that can be drawn on
pub trait DrawTarget {
    /// Put `glyph` at `pos`. `role` tells which part of the shape the point belongs to.
    fn plot(&mut self, pos: Position, glyph: char, role: PointRole);
}
