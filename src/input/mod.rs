//! # Input Module
//!
//! - [`Cursor`] - rune-indexed text buffer with an insertion point
//! - [`Key`] / [`KeySource`] - decoded key events and the terminal boundary

pub mod cursor;
pub mod keys;

pub use cursor::{Cursor, Pointer, BLANK_MASK};
pub use keys::{Cancel, CrosstermTerminal, Key, KeySource, ScriptedTerminal};
