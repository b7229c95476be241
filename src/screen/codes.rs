//! ANSI sequences used by the screen buffer and the session driver.
//!
//! Sequences are produced through crossterm commands so the exact bytes match
//! what the rest of the terminal stack emits.

use crossterm::{cursor, queue, terminal};
use std::io::{self, Write};

/// Clears the current row and returns the cursor to column 0.
pub fn clear_line(out: &mut impl Write) -> io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.write_all(b"\r")
}

/// Returns the cursor to column 0 of the current row. Raw mode turns off the
/// terminal's own carriage return after `\n`.
pub fn column_start(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\r")
}

pub fn move_up(out: &mut impl Write) -> io::Result<()> {
    queue!(out, cursor::MoveUp(1))
}

pub fn move_down(out: &mut impl Write) -> io::Result<()> {
    queue!(out, cursor::MoveDown(1))
}

pub fn hide_cursor(out: &mut impl Write) -> io::Result<()> {
    queue!(out, cursor::Hide)
}

pub fn show_cursor(out: &mut impl Write) -> io::Result<()> {
    queue!(out, cursor::Show)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(f: fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).expect("write to vec");
        String::from_utf8(out).expect("ascii")
    }

    #[test]
    fn test_sequences() {
        assert_eq!(emit(|o| clear_line(o)), "\x1b[2K\r");
        assert_eq!(emit(|o| column_start(o)), "\r");
        assert_eq!(emit(|o| move_up(o)), "\x1b[1A");
        assert_eq!(emit(|o| move_down(o)), "\x1b[1B");
        assert_eq!(emit(|o| hide_cursor(o)), "\x1b[?25l");
        assert_eq!(emit(|o| show_cursor(o)), "\x1b[?25h");
    }
}
