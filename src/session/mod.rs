//! # Sessions
//!
//! Interactive sessions are plain state machines. Each one implements
//! [`Interaction`]: it describes its current frame as lines of text and
//! advances one key at a time. [`drive`] owns everything else: raw mode,
//! the screen buffer, the read loop and terminal restoration.
//!
//! ```text
//! read key -> step(state, key) -> view() -> ScreenBuffer diff -> flush
//! ```
//!
//! One key is fully processed and flushed before the next is read.

pub mod multiselect;
pub mod prompt;
pub mod select;

pub use multiselect::MultiSelect;
pub use prompt::{Confirm, Prompt, Validator};
pub use select::{KeyBinding, KeyBindings, Select, SelectWithAdd, Selection};

use crate::error::Result;
use crate::input::{Key, KeySource};
use crate::screen::{codes, ScreenBuffer};
use crate::ui::Styles;

/// Outcome of feeding one key to a session.
#[derive(Debug)]
pub enum Step<T> {
    Continue,
    Done(Result<T>),
}

/// A session expressed as a step function.
pub trait Interaction {
    type Output;

    /// Lines of the current frame, top to bottom. A line may contain `\n`,
    /// in which case it occupies several rows.
    fn view(&self) -> Vec<String>;

    fn step(&mut self, key: Key) -> Step<Self::Output>;

    /// Final frame once the session has ended.
    ///
    /// `None` leaves the last frame on screen as it was flushed. An empty
    /// frame clears the session's region.
    fn finish(&self, outcome: &Result<Self::Output>) -> Option<Vec<String>> {
        let _ = outcome;
        None
    }
}

/// Styles for a session: the caller's choice, or whatever the terminal
/// supports.
pub(crate) fn resolve_styles(styles: Option<&Styles>, term: &impl KeySource) -> Styles {
    match styles {
        Some(styles) => styles.clone(),
        None => Styles::new(term.supports_color()),
    }
}

/// Runs `interaction` against `term` until it accepts or is cancelled.
///
/// The terminal is restored (cursor shown, raw mode off) on every exit path.
/// When both the session and the restoration fail, the session's error wins.
pub fn drive<I, T>(interaction: &mut I, term: &mut T) -> Result<I::Output>
where
    I: Interaction,
    T: KeySource,
{
    let session = std::any::type_name::<I>();
    tracing::debug!(session, "session started");

    let mut screen = ScreenBuffer::new();
    screen.set_width(term.width());

    term.enable_raw_mode()?;
    let outcome = codes::hide_cursor(term)
        .map_err(Into::into)
        .and_then(|()| run_loop(interaction, term, &mut screen));
    let restored = restore(interaction, term, &mut screen, &outcome);

    match &outcome {
        Ok(_) => tracing::debug!(session, "session accepted"),
        Err(err) => tracing::debug!(session, %err, "session ended"),
    }
    if let Err(err) = &restored {
        tracing::debug!(session, %err, "terminal restore failed");
    }

    let value = outcome?;
    restored?;
    Ok(value)
}

fn run_loop<I, T>(interaction: &mut I, term: &mut T, screen: &mut ScreenBuffer) -> Result<I::Output>
where
    I: Interaction,
    T: KeySource,
{
    loop {
        draw(screen, &interaction.view())?;
        screen.flush_to(term)?;

        let key = term.read_key()?;
        tracing::trace!(?key, "key event");

        if let Step::Done(outcome) = interaction.step(key) {
            return outcome;
        }
    }
}

fn restore<I, T>(
    interaction: &I,
    term: &mut T,
    screen: &mut ScreenBuffer,
    outcome: &Result<I::Output>,
) -> Result<()>
where
    I: Interaction,
    T: KeySource,
{
    if let Some(lines) = interaction.finish(outcome) {
        screen.reset();
        draw(screen, &lines)?;
        screen.flush_to(term)?;
    }

    codes::column_start(term)?;
    codes::show_cursor(term)?;
    term.flush()?;
    term.disable_raw_mode()
}

/// Queues a frame, splitting embedded newlines into separate rows.
fn draw(screen: &mut ScreenBuffer, lines: &[String]) -> Result<()> {
    for line in lines {
        for row in line.split('\n') {
            screen.write(row.replace('\r', ""))?;
        }
    }
    Ok(())
}
