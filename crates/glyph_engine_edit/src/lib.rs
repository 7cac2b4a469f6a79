#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]
mod editor;
pub use editor::*;

pub mod brushes;
pub mod tools;

mod input;
pub use input::*;

mod session;
pub use session::Editor;

mod shortcuts;

// Re-export all necessary types from glyph_engine
pub use glyph_engine::{Cell, EngineError, Grid, Mask, Position, Rectangle, Result, Size, Slice};
