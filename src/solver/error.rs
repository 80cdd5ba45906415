//! Engine error type

use crate::core::{FeedbackError, Guess};
use std::fmt;

/// Errors raised by a deduction session
///
/// `InvalidFeedback` and `RejectedGuess` leave the session untouched and the
/// caller may retry. Every other variant is fatal: the session is aborted and
/// refuses further feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Bulls/cows outside 0-4 or summing past 4
    InvalidFeedback(FeedbackError),
    /// A caller-supplied guess breaks the session's invariants
    RejectedGuess { guess: Guess, reason: &'static str },
    /// Fewer than four digits remain possible
    PoolExhausted { remaining: usize },
    /// A swap was required but fewer than two positions are unbound
    NoSwapAvailable { unbound: usize },
    /// The recorded feedback cannot come from any single secret
    Contradiction(String),
    /// The session already ended (solved or aborted)
    SessionOver,
}

impl EngineError {
    /// Whether this error ends the session
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::PoolExhausted { .. } | Self::NoSwapAvailable { .. } | Self::Contradiction(_)
        )
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFeedback(e) => write!(f, "{e}"),
            Self::RejectedGuess { guess, reason } => {
                write!(f, "Guess {guess} rejected: {reason}")
            }
            Self::PoolExhausted { remaining } => write!(
                f,
                "Only {remaining} candidate digits remain; the feedback must be inconsistent"
            ),
            Self::NoSwapAvailable { unbound } => write!(
                f,
                "Cannot swap with {unbound} unbound position(s); the feedback must be inconsistent"
            ),
            Self::Contradiction(detail) => write!(f, "Inconsistent feedback: {detail}"),
            Self::SessionOver => write!(f, "Session is over; start a new game"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFeedback(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FeedbackError> for EngineError {
    fn from(e: FeedbackError) -> Self {
        Self::InvalidFeedback(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_classification() {
        assert!(EngineError::PoolExhausted { remaining: 3 }.is_fatal());
        assert!(EngineError::NoSwapAvailable { unbound: 1 }.is_fatal());
        assert!(EngineError::Contradiction("x".into()).is_fatal());
        assert!(!EngineError::SessionOver.is_fatal());
        assert!(
            !EngineError::InvalidFeedback(FeedbackError::OutOfRange { bulls: 5, cows: 0 })
                .is_fatal()
        );
    }

    #[test]
    fn invalid_feedback_converts_and_keeps_source() {
        use std::error::Error;

        let err: EngineError = FeedbackError::OutOfRange { bulls: 3, cows: 2 }.into();
        assert!(matches!(err, EngineError::InvalidFeedback(_)));
        assert!(err.source().is_some());
    }
}
