//! Box outline tracing

use glyph_engine::{EngineError, Position, Rectangle, Result};

use super::{DrawTarget, PointRole};

pub const DEFAULT_BOX_CHARSET: &str = "┌─┐│└─┘";

/// A positional set of box glyphs.
///
/// Index 0 is the top left corner, 1 the horizontal edge, 2 the top right
/// corner, 3 the vertical edge, 4 the bottom left and 6 the bottom right
/// corner. Index 5 is unused but must be present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxCharset {
    chars: Vec<char>,
}

impl Default for BoxCharset {
    fn default() -> Self {
        Self {
            chars: DEFAULT_BOX_CHARSET.chars().collect(),
        }
    }
}

impl BoxCharset {
    pub const MIN_LEN: usize = 7;

    /// # Errors
    ///
    /// Fails if `charset` has fewer than [`BoxCharset::MIN_LEN`] chars.
    pub fn new(charset: &str) -> Result<Self> {
        let chars: Vec<char> = charset.chars().collect();
        if chars.len() < Self::MIN_LEN {
            return Err(EngineError::InvalidCharset {
                charset: charset.to_string(),
                min: Self::MIN_LEN,
            });
        }
        Ok(Self { chars })
    }

    pub fn glyph(&self, role: PointRole) -> char {
        let idx = match role {
            PointRole::NWCorner => 0,
            PointRole::TopSide | PointRole::BottomSide => 1,
            PointRole::NECorner => 2,
            PointRole::LeftSide | PointRole::RightSide => 3,
            PointRole::SWCorner => 4,
            PointRole::SECorner => 6,
        };
        self.chars[idx]
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Traces the outline of `bounds`: edges first, then the corners, so on a
/// box one cell wide or high the corners win.
pub fn draw_box<T: DrawTarget>(target: &mut T, charset: &BoxCharset, bounds: Rectangle) {
    if bounds.is_empty() {
        return;
    }
    let x0 = bounds.left();
    let y0 = bounds.top();
    let x1 = bounds.right() - 1;
    let y1 = bounds.bottom() - 1;

    for x in x0 + 1..x1 {
        plot(target, charset, Position::new(x, y0), PointRole::TopSide);
        plot(target, charset, Position::new(x, y1), PointRole::BottomSide);
    }
    for y in y0 + 1..y1 {
        plot(target, charset, Position::new(x0, y), PointRole::LeftSide);
        plot(target, charset, Position::new(x1, y), PointRole::RightSide);
    }

    plot(target, charset, Position::new(x0, y0), PointRole::NWCorner);
    plot(target, charset, Position::new(x1, y0), PointRole::NECorner);
    plot(target, charset, Position::new(x0, y1), PointRole::SWCorner);
    plot(target, charset, Position::new(x1, y1), PointRole::SECorner);
}

fn plot<T: DrawTarget>(target: &mut T, charset: &BoxCharset, pos: Position, role: PointRole) {
    target.plot(pos, charset.glyph(role), role);
}
