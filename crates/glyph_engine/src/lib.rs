#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]
mod position;
pub use position::*;

mod size;
pub use size::*;

mod rectangle;
pub use rectangle::*;

mod mask;
pub use mask::*;

mod cell;
pub use cell::*;

mod grid;
pub use grid::*;

mod slice;
pub use slice::*;

mod text_format;
pub use text_format::*;

mod error;
pub use error::*;
