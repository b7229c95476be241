//! # Screen Buffer
//!
//! Line-oriented, diff-based redraw of a block of terminal rows.
//!
//! Each redraw cycle writes the lines of the next frame with
//! [`ScreenBuffer::write`] and then calls [`ScreenBuffer::flush_to`], which
//! emits the escape sequence that turns the previous frame into the new one in
//! place:
//!
//! ```text
//! previous          pending           emitted
//! ┌────────────┐    ┌────────────┐
//! │ line A     │    │ line A'    │    up×3, (clear, A', down)
//! │ line B     │    │ line B'    │          (clear, B', down)
//! │ line C     │    └────────────┘          (clear, down), up×1
//! └────────────┘
//! ```
//!
//! Between flushes the terminal cursor rests on the row just below the block.
//! The "move up" codes that return it to the block's top-left corner are the
//! prefix of the next flush, so anything printed after the final flush lands
//! below the block rather than on top of it.

use crate::error::{PromptError, Result};
use crate::screen::codes;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    bytes: Vec<u8>,
    /// Terminal rows the line occupies once wrapped. Always at least 1.
    rows: usize,
}

/// Tracks the frame currently on screen and assembles the next one.
#[derive(Debug, Default)]
pub struct ScreenBuffer {
    previous: Vec<Line>,
    pending: Vec<Line>,
    clear_on_flush: bool,
    width: Option<usize>,
}

impl ScreenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer that accounts for lines wrapping past `width` columns.
    ///
    /// Width accounting is best effort: escape sequences are skipped and each
    /// character is measured with `unicode-width`.
    pub fn with_width(width: usize) -> Self {
        Self {
            width: (width > 0).then_some(width),
            ..Self::default()
        }
    }

    /// Updates the terminal width used for wrap accounting.
    pub fn set_width(&mut self, width: Option<usize>) {
        self.width = width.filter(|w| *w > 0);
    }

    /// Appends one line to the pending frame.
    ///
    /// Lines containing `\r` or `\n` are rejected: they would move the
    /// terminal cursor behind the buffer's back and break row accounting.
    pub fn write(&mut self, line: impl AsRef<[u8]>) -> Result<()> {
        let bytes = line.as_ref();
        if bytes.iter().any(|b| *b == b'\r' || *b == b'\n') {
            return Err(PromptError::InvalidLine(
                String::from_utf8_lossy(bytes).into_owned(),
            ));
        }

        let rows = self.rows_for(bytes);
        self.pending.push(Line {
            bytes: bytes.to_vec(),
            rows,
        });
        Ok(())
    }

    /// Drops the pending frame and arms a full erase of the frame on screen
    /// for the next flush.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.clear_on_flush = true;
    }

    /// Number of lines written since the last flush.
    pub fn cursor_row(&self) -> usize {
        self.pending.len()
    }

    /// Number of terminal rows occupied by the frame on screen.
    pub fn height(&self) -> usize {
        self.previous.iter().map(|l| l.rows).sum()
    }

    /// Emits the diff between the frame on screen and the pending frame to
    /// `sink`, then makes the pending frame current.
    pub fn flush_to<W: Write + ?Sized>(&mut self, sink: &mut W) -> Result<()> {
        let mut out = Vec::new();
        let on_screen = self.height();
        let wrapped = self.width.is_some()
            && self
                .previous
                .iter()
                .chain(self.pending.iter())
                .any(|l| l.rows > 1);

        if self.clear_on_flush || wrapped {
            for _ in 0..on_screen {
                codes::move_up(&mut out)?;
                codes::clear_line(&mut out)?;
            }
            for line in &self.pending {
                codes::clear_line(&mut out)?;
                out.extend_from_slice(&line.bytes);
                out.push(b'\n');
            }
        } else {
            for _ in 0..on_screen {
                codes::move_up(&mut out)?;
            }
            for (row, line) in self.pending.iter().enumerate() {
                codes::clear_line(&mut out)?;
                out.extend_from_slice(&line.bytes);
                if row < on_screen {
                    codes::move_down(&mut out)?;
                } else {
                    out.push(b'\n');
                }
            }

            // Rows left over from a taller frame are blanked, then the
            // cursor comes back so the block collapses to the new height.
            let stale = on_screen.saturating_sub(self.pending.len());
            for _ in 0..stale {
                codes::clear_line(&mut out)?;
                codes::move_down(&mut out)?;
            }
            for _ in 0..stale {
                codes::move_up(&mut out)?;
            }
        }

        sink.write_all(&out)?;
        sink.flush()?;

        tracing::trace!(
            bytes = out.len(),
            rows = self.pending.len(),
            full_redraw = self.clear_on_flush || wrapped,
            "screen flushed"
        );

        self.previous = std::mem::take(&mut self.pending);
        self.clear_on_flush = false;
        Ok(())
    }

    fn rows_for(&self, bytes: &[u8]) -> usize {
        match self.width {
            Some(width) => {
                let columns = display_width(&String::from_utf8_lossy(bytes));
                columns.div_ceil(width).max(1)
            }
            None => 1,
        }
    }
}

/// Printable width of `text`, ignoring CSI escape sequences.
pub fn display_width(text: &str) -> usize {
    let mut visible = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            visible.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a final byte in @..~
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            chars.next();
        }
    }

    visible.width()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP: &str = "\x1b[1A";
    const DOWN: &str = "\x1b[1B";
    const CLEAR: &str = "\x1b[2K\r";

    fn flush(buf: &mut ScreenBuffer) -> String {
        let mut out = Vec::new();
        buf.flush_to(&mut out).expect("flush");
        String::from_utf8(out).expect("utf8")
    }

    fn write_all(buf: &mut ScreenBuffer, lines: &[&str]) {
        for line in lines {
            buf.write(line).expect("write");
        }
    }

    #[test]
    fn test_initial_flush_appends_rows() {
        let mut buf = ScreenBuffer::new();
        write_all(&mut buf, &["Hello Darkness,", "My Old Friend"]);
        assert_eq!(buf.cursor_row(), 2);

        let got = flush(&mut buf);
        assert_eq!(
            got,
            format!("{CLEAR}Hello Darkness,\n{CLEAR}My Old Friend\n")
        );
        assert_eq!(buf.cursor_row(), 0);
        assert_eq!(buf.height(), 2);
    }

    #[test]
    fn test_same_height_rewrites_in_place() {
        let mut buf = ScreenBuffer::new();
        write_all(&mut buf, &["one", "two", "three"]);
        flush(&mut buf);

        write_all(&mut buf, &["one", "two", "three"]);
        let got = flush(&mut buf);
        assert_eq!(
            got,
            format!("{UP}{UP}{UP}{CLEAR}one{DOWN}{CLEAR}two{DOWN}{CLEAR}three{DOWN}")
        );
        assert!(!got.contains('\n'), "no extra rows: {got:?}");
    }

    #[test]
    fn test_shorter_frame_clears_and_collapses() {
        let mut buf = ScreenBuffer::new();
        write_all(&mut buf, &["a", "b", "c"]);
        flush(&mut buf);

        write_all(&mut buf, &["x"]);
        let got = flush(&mut buf);
        assert_eq!(
            got,
            format!("{UP}{UP}{UP}{CLEAR}x{DOWN}{CLEAR}{DOWN}{CLEAR}{DOWN}{UP}{UP}")
        );
        assert_eq!(buf.height(), 1);

        // The next frame only climbs the single remaining row.
        write_all(&mut buf, &["y"]);
        assert_eq!(flush(&mut buf), format!("{UP}{CLEAR}y{DOWN}"));
    }

    #[test]
    fn test_taller_frame_appends_new_rows() {
        let mut buf = ScreenBuffer::new();
        write_all(&mut buf, &["a"]);
        flush(&mut buf);

        write_all(&mut buf, &["a", "b", "c"]);
        let got = flush(&mut buf);
        assert_eq!(
            got,
            format!("{UP}{CLEAR}a{DOWN}{CLEAR}b\n{CLEAR}c\n")
        );
        assert_eq!(buf.height(), 3);
    }

    #[test]
    fn test_reset_erases_previous_rows_first() {
        let mut buf = ScreenBuffer::new();
        write_all(&mut buf, &["a", "b"]);
        flush(&mut buf);

        buf.write("dropped").expect("write");
        buf.reset();
        buf.write("final").expect("write");
        let got = flush(&mut buf);
        assert_eq!(got, format!("{UP}{CLEAR}{UP}{CLEAR}{CLEAR}final\n"));
    }

    #[test]
    fn test_reset_without_lines_only_erases() {
        let mut buf = ScreenBuffer::new();
        write_all(&mut buf, &["a"]);
        flush(&mut buf);

        buf.reset();
        assert_eq!(flush(&mut buf), format!("{UP}{CLEAR}"));
        assert_eq!(buf.height(), 0);
        assert_eq!(flush(&mut buf), "");
    }

    #[test]
    fn test_rejects_line_terminators() {
        let mut buf = ScreenBuffer::new();
        assert!(matches!(
            buf.write("a\nb"),
            Err(PromptError::InvalidLine(_))
        ));
        assert!(buf.write("a\rb").is_err());
        assert_eq!(buf.cursor_row(), 0);
    }

    #[test]
    fn test_display_width_skips_escapes() {
        assert_eq!(display_width("plain"), 5);
        assert_eq!(display_width("\x1b[1;34m?\x1b[0m label"), 7);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_wrapped_lines_force_full_redraw() {
        let mut buf = ScreenBuffer::with_width(4);
        write_all(&mut buf, &["abcdef", "x"]);
        assert_eq!(buf.cursor_row(), 2);
        flush(&mut buf);
        assert_eq!(buf.height(), 3);

        write_all(&mut buf, &["ab"]);
        let got = flush(&mut buf);
        assert_eq!(got, format!("{UP}{CLEAR}{UP}{CLEAR}{UP}{CLEAR}{CLEAR}ab\n"));
        assert_eq!(buf.height(), 1);
    }

    #[test]
    fn test_exact_width_line_takes_one_row() {
        let mut buf = ScreenBuffer::with_width(4);
        write_all(&mut buf, &["abcd"]);
        flush(&mut buf);
        assert_eq!(buf.height(), 1);
    }
}
