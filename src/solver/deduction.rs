//! Single-change deduction
//!
//! Compares a turn with the turn immediately before it. When exactly one
//! position changed, the bulls/cows delta pins down a permanent fact:
//!
//! ```text
//! bulls +1            → new digit is a bull at the changed position
//! bulls -1            → previous digit is a bull at the changed position
//! bulls =, cows -1    → new digit is absent from the secret
//! bulls =, cows +1    → previous digit is absent from the secret
//! bulls =, cows =     → nothing
//! ```
//!
//! A two-position swap is also read: a swing of two bulls confirms both
//! positions at once. Any other difference between the turns yields no
//! inference.

use crate::core::{Feedback, Guess};
use std::fmt;

/// One recorded turn: the guess asked and the feedback it earned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Guess,
    pub feedback: Feedback,
}

impl Turn {
    #[must_use]
    pub const fn new(guess: Guess, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }
}

/// A digit replaced at one position between consecutive turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub position: usize,
    pub previous: u8,
    pub new: u8,
}

/// Result of comparing two consecutive turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inference {
    /// `digit` sits at `position` in the secret
    Bull { position: usize, digit: u8 },
    /// `digit` does not appear in the secret
    Excluded { digit: u8 },
    /// Both swapped positions are confirmed
    SwapBulls {
        first: (usize, u8),
        second: (usize, u8),
    },
    /// No fact can be drawn from this turn
    Nothing(NoInference),
}

/// Why a turn produced no inference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoInference {
    /// There is no earlier turn to compare with
    FirstTurn,
    /// The guess did not change
    NoChange,
    /// More than one position changed and it was not a clean swap
    MultipleChanges(usize),
    /// The change moved neither bulls nor cows in a readable way
    Uninformative,
}

impl fmt::Display for Inference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bull { position, digit } => {
                write!(f, "{digit} is a bull at position {}", position + 1)
            }
            Self::Excluded { digit } => write!(f, "{digit} is not in the secret"),
            Self::SwapBulls { first, second } => write!(
                f,
                "{} is a bull at position {} and {} at position {}",
                first.1,
                first.0 + 1,
                second.1,
                second.0 + 1
            ),
            Self::Nothing(reason) => match reason {
                NoInference::FirstTurn => write!(f, "first turn, nothing to compare"),
                NoInference::NoChange => write!(f, "guess unchanged"),
                NoInference::MultipleChanges(n) => write!(f, "{n} positions changed"),
                NoInference::Uninformative => write!(f, "no new information"),
            },
        }
    }
}

/// Find the single changed position between two guesses
///
/// Returns `Err` with the number of differing positions when it is not
/// exactly one.
pub fn single_change(previous: &Guess, current: &Guess) -> Result<Change, usize> {
    match previous.differing_positions(current).as_slice() {
        &[position] => Ok(Change {
            position,
            previous: previous.digit_at(position),
            new: current.digit_at(position),
        }),
        other => Err(other.len()),
    }
}

/// Compare the latest turn with the one before it
#[must_use]
pub fn deduce(previous: Option<&Turn>, latest: &Turn) -> Inference {
    let Some(previous) = previous else {
        return Inference::Nothing(NoInference::FirstTurn);
    };

    match single_change(&previous.guess, &latest.guess) {
        Ok(change) => deduce_substitution(change, previous.feedback, latest.feedback),
        Err(0) => Inference::Nothing(NoInference::NoChange),
        Err(2) => deduce_swap(previous, latest),
        Err(n) => Inference::Nothing(NoInference::MultipleChanges(n)),
    }
}

fn deduce_substitution(change: Change, before: Feedback, after: Feedback) -> Inference {
    let bulls_delta = i16::from(after.bulls()) - i16::from(before.bulls());
    let cows_delta = i16::from(after.cows()) - i16::from(before.cows());

    match (bulls_delta, cows_delta.signum()) {
        (1, _) => Inference::Bull {
            position: change.position,
            digit: change.new,
        },
        (-1, _) => Inference::Bull {
            position: change.position,
            digit: change.previous,
        },
        (0, -1) => Inference::Excluded { digit: change.new },
        (0, 1) => Inference::Excluded {
            digit: change.previous,
        },
        _ => Inference::Nothing(NoInference::Uninformative),
    }
}

fn deduce_swap(previous: &Turn, latest: &Turn) -> Inference {
    let positions = previous.guess.differing_positions(&latest.guess);
    let (a, b) = (positions[0], positions[1]);

    if previous.guess.swapped(a, b) != latest.guess {
        return Inference::Nothing(NoInference::MultipleChanges(2));
    }

    let bulls_delta = i16::from(latest.feedback.bulls()) - i16::from(previous.feedback.bulls());
    let source = match bulls_delta {
        2 => &latest.guess,
        -2 => &previous.guess,
        _ => return Inference::Nothing(NoInference::Uninformative),
    };

    Inference::SwapBulls {
        first: (a, source.digit_at(a)),
        second: (b, source.digit_at(b)),
    }
}
