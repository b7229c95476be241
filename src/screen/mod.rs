//! # Screen Module
//!
//! Flicker-free redraw of the interactive block.
//!
//! - [`ScreenBuffer`] - diffs consecutive frames into escape sequences
//! - [`codes`] - the ANSI sequences it emits

pub mod buffer;
pub mod codes;

pub use buffer::{display_width, ScreenBuffer};
