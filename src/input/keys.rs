//! # Key Source
//!
//! Logical key events and the terminal boundary that produces them.
//!
//! Sessions never talk to the terminal directly. They read [`Key`]s from a
//! [`KeySource`], which also accepts the escape sequences the screen buffer
//! emits. [`CrosstermTerminal`] is the production implementation;
//! [`ScriptedTerminal`] replays a fixed key sequence and records output, which
//! is how sessions are tested.

use crate::error::{PromptError, Result};
use crate::ui::ColorMode;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::collections::VecDeque;
use std::io::{self, Write};

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    Esc,
}

impl Key {
    /// The text this key inserts when typed, if any.
    pub fn printable(&self) -> Option<char> {
        match self {
            Key::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}

/// The terminal as seen by a session: a stream of keys in, escape sequences
/// out.
///
/// `read_key` blocks until a key arrives. Ctrl-C and Ctrl-D surface as
/// [`PromptError::Interrupted`] and [`PromptError::EndOfInput`].
pub trait KeySource: Write {
    fn read_key(&mut self) -> Result<Key>;

    /// Terminal width in columns, when known.
    fn width(&self) -> Option<usize> {
        None
    }

    /// Whether sessions without explicit styles should draw in color.
    fn supports_color(&self) -> bool {
        false
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Maps a crossterm key event to a [`Key`].
///
/// Returns `Ok(None)` for events sessions do not react to (releases,
/// unbound function keys).
pub fn translate(key: KeyEvent) -> Result<Option<Key>> {
    if key.kind == KeyEventKind::Release {
        return Ok(None);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Err(PromptError::Interrupted),
            KeyCode::Char('d') => Err(PromptError::EndOfInput),
            KeyCode::Char('h') => Ok(Some(Key::Backspace)),
            KeyCode::Char('n') => Ok(Some(Key::Down)),
            KeyCode::Char('p') => Ok(Some(Key::Up)),
            KeyCode::Char('b') => Ok(Some(Key::Left)),
            KeyCode::Char('f') => Ok(Some(Key::Right)),
            KeyCode::Char('a') => Ok(Some(Key::Home)),
            KeyCode::Char('e') => Ok(Some(Key::End)),
            _ => Ok(None),
        };
    }

    let key = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Esc,
        _ => return Ok(None),
    };
    Ok(Some(key))
}

/// Production key source backed by crossterm and stdout.
pub struct CrosstermTerminal {
    out: io::Stdout,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for CrosstermTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl KeySource for CrosstermTerminal {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(key) = translate(key)? {
                    return Ok(key);
                }
            }
        }
    }

    fn width(&self) -> Option<usize> {
        terminal::size().ok().map(|(cols, _)| usize::from(cols))
    }

    fn supports_color(&self) -> bool {
        ColorMode::Auto.resolve()
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

/// Key source that replays a predetermined sequence of keys.
///
/// Once the script is exhausted every read fails with
/// [`PromptError::EndOfInput`]. Everything written is kept in `output`.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    keys: VecDeque<Result<Key, Cancel>>,
    pub output: Vec<u8>,
    width: Option<usize>,
    color: bool,
    raw_mode: bool,
}

/// A scripted cancellation signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cancel {
    Interrupt,
    Eof,
}

impl ScriptedTerminal {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().map(Ok).collect(),
            ..Self::default()
        }
    }

    /// Script that types `text` one character at a time, then presses Enter.
    pub fn typing(text: &str) -> Self {
        Self::new(text.chars().map(Key::Char).chain([Key::Enter]))
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Reports a color-capable terminal.
    pub fn with_color(mut self) -> Self {
        self.color = true;
        self
    }

    /// Appends a cancellation signal to the script.
    pub fn then_cancel(mut self, cancel: Cancel) -> Self {
        self.keys.push_back(Err(cancel));
        self
    }

    pub fn push(&mut self, key: Key) {
        self.keys.push_back(Ok(key));
    }

    /// Keys not yet consumed.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn output_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl Write for ScriptedTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl KeySource for ScriptedTerminal {
    fn read_key(&mut self) -> Result<Key> {
        match self.keys.pop_front() {
            Some(Ok(key)) => Ok(key),
            Some(Err(Cancel::Interrupt)) => Err(PromptError::Interrupted),
            Some(Err(Cancel::Eof)) | None => Err(PromptError::EndOfInput),
        }
    }

    fn width(&self) -> Option<usize> {
        self.width
    }

    fn supports_color(&self) -> bool {
        self.color
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.raw_mode = false;
        Ok(())
    }
}
