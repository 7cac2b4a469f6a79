use serde::{Deserialize, Serialize};

use crate::Mask;

/// One grid position: a glyph with its foreground and background color.
///
/// An empty string in any channel means unset/transparent for that channel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub glyph: String,
    #[serde(rename = "foregroundColor")]
    pub foreground: String,
    #[serde(rename = "backgroundColor")]
    pub background: String,
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(Glyph: '{}', Fg: '{}', Bg: '{}')", self.glyph, self.foreground, self.background)
    }
}

impl Cell {
    #[must_use]
    pub fn new(glyph: impl Into<String>, foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Cell {
            glyph: glyph.into(),
            foreground: foreground.into(),
            background: background.into(),
        }
    }

    pub fn empty() -> Self {
        Cell::default()
    }

    pub fn is_empty(&self) -> bool {
        self.glyph.is_empty() && self.foreground.is_empty() && self.background.is_empty()
    }

    /// Overwrites this cell with the values of `other`, channel by channel.
    pub fn assign(&mut self, other: &Cell) {
        self.glyph.clone_from(&other.glyph);
        self.foreground.clone_from(&other.foreground);
        self.background.clone_from(&other.background);
    }

    /// Returns the cell that results from painting `brush` over this cell
    /// with only the channels enabled in `mask` taken from the brush.
    pub fn masked(&self, mask: Mask, brush: &Cell) -> Cell {
        Cell {
            glyph: if mask.glyph { brush.glyph.clone() } else { self.glyph.clone() },
            foreground: if mask.foreground { brush.foreground.clone() } else { self.foreground.clone() },
            background: if mask.background { brush.background.clone() } else { self.background.clone() },
        }
    }
}
