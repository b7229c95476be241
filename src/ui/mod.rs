//! # UI Module
//!
//! Everything between a session's state and the bytes of a frame.
//!
//! - [`Styles`] - immutable icon and color configuration
//! - [`Template`] / [`Item`] - the template language and the value capability it reads
//! - [`Renderer`] - named template slots compiled once per session
//! - [`Config`] - persisted user defaults

pub mod config;
pub mod render;
pub mod style;
pub mod template;

pub use config::{ColorMode, Config};
pub use render::{Renderer, TemplateKind, Templates};
pub use style::{Style, Styles};
pub use template::{Item, Template, TemplateError};
