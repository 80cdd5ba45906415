//! Bulls and cows feedback calculation and representation
//!
//! Feedback for a guess is a pair of counts:
//! - bulls: digits matching both value and position in the secret
//! - cows: digits present in the secret but at a different position
//!
//! Codes never repeat a digit, so each secret digit is consumed at most once
//! and `bulls + cows` is simply the number of shared digits.

use super::Guess;
use super::guess::CODE_LENGTH;
use std::fmt;
use std::str::FromStr;

const MAX_COUNT: u8 = CODE_LENGTH as u8;

/// Feedback for a single Bulls and Cows guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    bulls: u8,
    cows: u8,
}

/// Error type for out-of-range feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    OutOfRange { bulls: u8, cows: u8 },
    Unparseable(String),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { bulls, cows } => write!(
                f,
                "Feedback ({bulls}, {cows}) is invalid: bulls and cows must be 0-{MAX_COUNT} with bulls + cows <= {MAX_COUNT}"
            ),
            Self::Unparseable(s) => write!(f, "Invalid feedback string: {s}"),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Exact match (four bulls)
    pub const SOLVED: Self = Self {
        bulls: MAX_COUNT,
        cows: 0,
    };

    /// None of the guessed digits are in the secret
    pub const ZERO: Self = Self { bulls: 0, cows: 0 };

    /// Create validated feedback
    ///
    /// # Errors
    /// Returns `FeedbackError::OutOfRange` if either count exceeds 4 or their
    /// sum does.
    pub const fn new(bulls: u8, cows: u8) -> Result<Self, FeedbackError> {
        if bulls > MAX_COUNT || cows > MAX_COUNT || bulls + cows > MAX_COUNT {
            return Err(FeedbackError::OutOfRange { bulls, cows });
        }
        Ok(Self { bulls, cows })
    }

    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Number of guessed digits present anywhere in the secret
    #[inline]
    #[must_use]
    pub const fn hits(self) -> u8 {
        self.bulls + self.cows
    }

    /// Check if this is an exact match
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.bulls == MAX_COUNT
    }

    /// Check for the (0, 0) response
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.bulls == 0 && self.cows == 0
    }

    /// All four digits are right but not all positions are
    ///
    /// Covers (1,3) and (2,2), and also (0,4), where single-digit
    /// substitution can only lose hits.
    #[inline]
    #[must_use]
    pub const fn is_plateau(self) -> bool {
        self.hits() == MAX_COUNT && !self.is_solved()
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Feedback, Guess};
    ///
    /// let secret = Guess::new([3, 2, 8, 5]).unwrap();
    /// let guess = Guess::new([3, 2, 5, 1]).unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!((feedback.bulls(), feedback.cows()), (2, 1));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Guess, secret: &Guess) -> Self {
        let mut bulls = 0;
        let mut hits = 0;

        for (i, &digit) in guess.digits().iter().enumerate() {
            if secret.digit_at(i) == digit {
                bulls += 1;
            }
            if secret.contains(digit) {
                hits += 1;
            }
        }

        Self {
            bulls,
            cows: hits - bulls,
        }
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse "21", "2 1", "2,1" or "2b1c"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let counts: Vec<u8> = s
            .chars()
            .filter(char::is_ascii_digit)
            .map(|c| c as u8 - b'0')
            .collect();

        let stray = s.chars().any(|c| {
            !(c.is_ascii_digit() || c.is_whitespace() || matches!(c, ',' | 'b' | 'B' | 'c' | 'C'))
        });

        match counts.as_slice() {
            [bulls, cows] if !stray => Self::new(*bulls, *cows),
            _ => Err(FeedbackError::Unparseable(s.to_string())),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}C", self.bulls, self.cows)
    }
}
