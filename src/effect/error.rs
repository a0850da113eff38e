//! Error types raised by the interpreters.
//!
//! The effect algebra itself has no error channel. Each interpreter's effect
//! type carries its own failure, and these are the failures it can report.
//! Both types are `Clone` because a halted computation may be run again and
//! must report the same error every time.

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// A scripted fixture ran out of data before the computation finished.
///
/// # Examples
///
/// ```rust
/// use guessing_game::effect::FixtureError;
///
/// let error = FixtureError::RandomExhausted { bound: 5 };
/// assert_eq!(
///     error.to_string(),
///     "fixture exhausted: no random draw left for random_int(5)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// `get_line` was called with an empty input queue.
    #[error("fixture exhausted: no input line left for get_line")]
    InputExhausted,
    /// `random_int` was called with an empty draw queue.
    #[error("fixture exhausted: no random draw left for random_int({bound})")]
    RandomExhausted {
        /// The bound the business logic asked for.
        bound: u32,
    },
}

/// A console interaction failed.
#[derive(Debug, Clone, Error)]
pub enum ConsoleError {
    /// The input reached end of stream before a line could be read.
    #[error("input closed before a line was read")]
    InputClosed,
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[source] Arc<io::Error>),
}

impl From<io::Error> for ConsoleError {
    fn from(error: io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}

impl PartialEq for ConsoleError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InputClosed, Self::InputClosed) => true,
            (Self::Io(left), Self::Io(right)) => left.kind() == right.kind(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn input_exhausted_display() {
        assert_eq!(
            FixtureError::InputExhausted.to_string(),
            "fixture exhausted: no input line left for get_line"
        );
    }

    #[rstest]
    fn io_error_converts_and_keeps_source() {
        let error = ConsoleError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(error.to_string(), "console I/O failed: pipe closed");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[rstest]
    #[case(ConsoleError::InputClosed, ConsoleError::InputClosed, true)]
    #[case(
        ConsoleError::from(io::Error::from(io::ErrorKind::BrokenPipe)),
        ConsoleError::from(io::Error::from(io::ErrorKind::BrokenPipe)),
        true
    )]
    #[case(
        ConsoleError::InputClosed,
        ConsoleError::from(io::Error::from(io::ErrorKind::BrokenPipe)),
        false
    )]
    fn console_errors_compare_by_kind(
        #[case] left: ConsoleError,
        #[case] right: ConsoleError,
        #[case] expected: bool,
    ) {
        assert_eq!(left == right, expected);
    }
}
