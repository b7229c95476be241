//! # Errors
//!
//! Every session ends in either a value or one of the [`PromptError`]
//! variants below. Validation failures are not part of this taxonomy: they
//! are rendered in place and the session keeps running.

use std::io;
use thiserror::Error;

/// Terminal outcomes of a prompt session other than acceptance.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user pressed Ctrl-C.
    #[error("^C")]
    Interrupted,

    /// The user pressed Ctrl-D, or the key source ran dry.
    #[error("^D")]
    EndOfInput,

    /// A confirm prompt was answered with something other than yes.
    #[error("aborted")]
    Aborted,

    /// The session was misconfigured. Raised before any terminal I/O.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A line handed to the screen buffer contained a line terminator.
    #[error("{0:?} should not contain either \\r or \\n")]
    InvalidLine(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PromptError {
    /// True for the variants caused by the user leaving the session
    /// (interrupt, end of input, or a rejected confirm).
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Interrupted | Self::EndOfInput | Self::Aborted)
    }
}

pub type Result<T, E = PromptError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellations() {
        assert!(PromptError::Interrupted.is_cancellation());
        assert!(PromptError::EndOfInput.is_cancellation());
        assert!(PromptError::Aborted.is_cancellation());
        assert!(!PromptError::Config("size".to_string()).is_cancellation());
    }

    #[test]
    fn test_invalid_line_message() {
        let err = PromptError::InvalidLine("a\nb".to_string());
        assert_eq!(err.to_string(), "\"a\\nb\" should not contain either \\r or \\n");
    }
}
