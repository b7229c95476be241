//! termprompt - interactive terminal prompts
//!
//! Single-line text input, yes/no confirmation, single-select and
//! multi-select lists, with live validation, masking, search filtering and
//! flicker-free redraw of the prompt block.
//!
//! Every session is a synchronous state machine driven one key at a time;
//! each frame is diffed against the previous one by a [`ScreenBuffer`] so
//! only the changed rows are rewritten in place.

pub mod error;
pub mod input;
pub mod list;
pub mod screen;
pub mod session;
pub mod ui;

pub use error::{PromptError, Result};
pub use input::{Cursor, Key, KeySource, Pointer};
pub use list::ListWindow;
pub use screen::ScreenBuffer;
pub use session::{
    Confirm, KeyBinding, KeyBindings, MultiSelect, Prompt, Select, SelectWithAdd, Selection,
};
pub use ui::{Item, Styles, TemplateKind, Templates};
