//! # List Module
//!
//! [`ListWindow`] pages and filters an item collection through a fixed-size
//! visible window.

pub mod window;

pub use window::{ListWindow, Searcher};
