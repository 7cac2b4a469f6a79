//! Channel mask for paint-like operations

use serde::{Deserialize, Serialize};

/// Decides which cell channels a paint-like operation may overwrite.
/// Disabled channels keep the destination's current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mask {
    pub glyph: bool,
    pub foreground: bool,
    pub background: bool,
}

impl Default for Mask {
    fn default() -> Self {
        Mask::ALL
    }
}

impl Mask {
    pub const ALL: Mask = Mask {
        glyph: true,
        foreground: true,
        background: true,
    };

    pub const GLYPH_ONLY: Mask = Mask {
        glyph: true,
        foreground: false,
        background: false,
    };

    pub const FOREGROUND_ONLY: Mask = Mask {
        glyph: false,
        foreground: true,
        background: false,
    };

    pub const BACKGROUND_ONLY: Mask = Mask {
        glyph: false,
        foreground: false,
        background: true,
    };
}
