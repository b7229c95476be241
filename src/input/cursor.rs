//! # Text Cursor
//!
//! A rune-indexed edit buffer with an insertion point.
//!
//! The content and position are kept pristine; the visual cursor marker is
//! only spliced in by [`Cursor::render`]. That keeps masking and live
//! validation independent of edit history: validators always see the real
//! text, the terminal only ever sees the rendered form.

use crate::input::keys::Key;
use serde::{Deserialize, Serialize};

/// How the insertion point is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pointer {
    /// A full block glyph drawn over the character under the cursor.
    #[default]
    Solid,
    /// The character under the cursor in inverse video.
    Inverse,
    /// A `|` drawn just before the character under the cursor.
    Pipe,
}

impl Pointer {
    fn draw(self, under: Option<char>, out: &mut String) {
        match self {
            Pointer::Solid => out.push('\u{2588}'),
            Pointer::Inverse => {
                out.push_str("\x1b[7m");
                out.push(under.unwrap_or(' '));
                out.push_str("\x1b[0m");
            }
            Pointer::Pipe => {
                out.push('|');
                out.extend(under);
            }
        }
    }
}

/// Mask character that hides the input length entirely.
pub const BLANK_MASK: char = ' ';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    content: Vec<char>,
    position: usize,
    erase_on_first_key: bool,
    pointer: Pointer,
}

impl Cursor {
    /// Creates a cursor seeded with `text`, positioned at its end.
    pub fn new(text: &str) -> Self {
        let content: Vec<char> = text.chars().collect();
        Self {
            position: content.len(),
            content,
            erase_on_first_key: false,
            pointer: Pointer::default(),
        }
    }

    pub fn with_pointer(mut self, pointer: Pointer) -> Self {
        self.pointer = pointer;
        self
    }

    /// Discard the seed text on the first edit keystroke instead of editing
    /// it. Has no effect when the seed is empty.
    pub fn erase_on_first_key(mut self, erase: bool) -> Self {
        self.erase_on_first_key = erase && !self.content.is_empty();
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True while the seed text is still waiting to be discarded.
    pub fn is_erase_armed(&self) -> bool {
        self.erase_on_first_key
    }

    pub fn get(&self) -> String {
        self.content.iter().collect()
    }

    /// Splices `text` in at the insertion point and moves past it.
    pub fn insert(&mut self, text: &str) {
        let runes: Vec<char> = text.chars().collect();
        let count = runes.len();
        self.content.splice(self.position..self.position, runes);
        self.move_by(count as isize);
    }

    /// Removes the rune before the insertion point.
    pub fn backspace(&mut self) {
        if self.position == 0 {
            return;
        }
        self.content.remove(self.position - 1);
        self.move_by(-1);
    }

    /// Removes the rune under the insertion point.
    pub fn delete(&mut self) {
        if self.position < self.content.len() {
            self.content.remove(self.position);
        }
    }

    pub fn move_by(&mut self, delta: isize) {
        self.position = self
            .position
            .saturating_add_signed(delta)
            .min(self.content.len());
    }

    pub fn move_to(&mut self, position: usize) {
        self.position = position.min(self.content.len());
    }

    pub fn start(&mut self) {
        self.move_to(0);
    }

    pub fn end(&mut self) {
        self.move_to(self.content.len());
    }

    /// Replaces the content and moves to its end.
    pub fn replace(&mut self, text: &str) {
        self.content = text.chars().collect();
        self.end();
    }

    /// Renders the content with the pointer at the insertion point.
    ///
    /// With a mask every rune is drawn as the mask character, except
    /// [`BLANK_MASK`] which hides the content (and its length) entirely.
    pub fn render(&self, mask: Option<char>) -> String {
        let shown: Vec<char> = match mask {
            Some(BLANK_MASK) => Vec::new(),
            Some(m) => vec![m; self.content.len()],
            None => self.content.clone(),
        };
        let at = self.position.min(shown.len());

        let mut out = String::with_capacity(shown.len() + 8);
        out.extend(&shown[..at]);
        self.pointer.draw(shown.get(at).copied(), &mut out);
        if at < shown.len() {
            out.extend(&shown[at + 1..]);
        }
        out
    }

    /// Applies an editing key. Returns false for keys the cursor ignores.
    pub fn edit(&mut self, key: Key) -> bool {
        match key {
            Key::Backspace | Key::Delete if self.erase_on_first_key => {
                self.erase_on_first_key = false;
                self.replace("");
            }
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete(),
            Key::Left => self.move_by(-1),
            Key::Right => {
                self.erase_on_first_key = false;
                self.move_by(1);
            }
            Key::Home => self.start(),
            Key::End => {
                self.erase_on_first_key = false;
                self.end();
            }
            key => match key.printable() {
                Some(c) => {
                    if self.erase_on_first_key {
                        self.erase_on_first_key = false;
                        self.replace("");
                    }
                    let mut buf = [0u8; 4];
                    self.insert(c.encode_utf8(&mut buf));
                }
                None => return false,
            },
        }
        true
    }
}
