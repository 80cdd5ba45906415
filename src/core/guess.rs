//! Bulls and Cows code representation
//!
//! A Guess stores four distinct digits in 1-9. The same type is used for the
//! engine's hypotheses and for the hidden secret.

use std::fmt;
use std::str::FromStr;

/// Number of digits in a code
pub const CODE_LENGTH: usize = 4;

/// Smallest digit a code may contain
pub const MIN_DIGIT: u8 = 1;

/// Largest digit a code may contain
pub const MAX_DIGIT: u8 = 9;

/// A 4-digit code with no repeated digits
///
/// Ordering is lexicographic on the digits, which keeps the secret universe
/// and candidate lists stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guess([u8; CODE_LENGTH]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength(usize),
    InvalidDigit(char),
    DigitOutOfRange(u8),
    RepeatedDigit(u8),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::InvalidDigit(ch) => write!(f, "Code digits must be 1-9, got '{ch}'"),
            Self::DigitOutOfRange(d) => write!(f, "Code digits must be 1-9, got {d}"),
            Self::RepeatedDigit(d) => write!(f, "Code digits must be distinct, {d} repeats"),
        }
    }
}

impl std::error::Error for GuessError {}

impl Guess {
    /// Create a code from four digits
    ///
    /// # Errors
    /// Returns `GuessError` if a digit is outside 1-9 or a digit repeats.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Guess;
    ///
    /// let guess = Guess::new([3, 2, 8, 5]).unwrap();
    /// assert_eq!(guess.to_string(), "3285");
    ///
    /// assert!(Guess::new([1, 1, 2, 3]).is_err());
    /// assert!(Guess::new([0, 1, 2, 3]).is_err());
    /// ```
    pub fn new(digits: [u8; CODE_LENGTH]) -> Result<Self, GuessError> {
        let mut seen = 0u16;
        for &d in &digits {
            if !(MIN_DIGIT..=MAX_DIGIT).contains(&d) {
                return Err(GuessError::DigitOutOfRange(d));
            }
            if seen & (1 << d) != 0 {
                return Err(GuessError::RepeatedDigit(d));
            }
            seen |= 1 << d;
        }
        Ok(Self(digits))
    }

    /// Create a code from digits already known to be distinct and in range
    ///
    /// # Panics
    /// Panics in debug mode if the digits are not a valid code
    #[inline]
    #[must_use]
    pub(crate) fn from_digits_unchecked(digits: [u8; CODE_LENGTH]) -> Self {
        debug_assert!(Self::new(digits).is_ok(), "invalid code digits {digits:?}");
        Self(digits)
    }

    /// Get the digits in position order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the code contains a specific digit
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }

    /// Position of a digit, if present
    #[inline]
    #[must_use]
    pub fn position_of(&self, digit: u8) -> Option<usize> {
        self.0.iter().position(|&d| d == digit)
    }

    /// Positions where the two codes hold different digits
    #[must_use]
    pub fn differing_positions(&self, other: &Self) -> Vec<usize> {
        (0..CODE_LENGTH)
            .filter(|&i| self.0[i] != other.0[i])
            .collect()
    }

    /// Replace the digit at `position`
    ///
    /// Returns `None` if `digit` already sits elsewhere in the code, which
    /// would break distinctness.
    #[must_use]
    pub fn with_digit(&self, position: usize, digit: u8) -> Option<Self> {
        match self.position_of(digit) {
            Some(existing) if existing != position => None,
            _ => {
                let mut digits = self.0;
                digits[position] = digit;
                Some(Self(digits))
            }
        }
    }

    /// Exchange the digits at two positions
    #[must_use]
    pub const fn swapped(&self, a: usize, b: usize) -> Self {
        let mut digits = self.0;
        let tmp = digits[a];
        digits[a] = digits[b];
        digits[b] = tmp;
        Self(digits)
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    /// Parse "1234", "1 2 3 4" or "1,2,3,4"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();

        if chars.len() != CODE_LENGTH {
            return Err(GuessError::InvalidLength(chars.len()));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(chars) {
            *slot = match ch.to_digit(10) {
                Some(d @ 1..=9) => d as u8,
                _ => return Err(GuessError::InvalidDigit(ch)),
            };
        }

        Self::new(digits)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_creation_valid() {
        let guess = Guess::new([1, 2, 3, 4]).unwrap();
        assert_eq!(guess.digits(), &[1, 2, 3, 4]);
        assert_eq!(guess.to_string(), "1234");
    }

    #[test]
    fn guess_creation_rejects_zero_and_repeats() {
        assert!(matches!(
            Guess::new([0, 2, 3, 4]),
            Err(GuessError::DigitOutOfRange(0))
        ));
        assert!(matches!(
            Guess::new([1, 2, 2, 4]),
            Err(GuessError::RepeatedDigit(2))
        ));
        assert!(Guess::new([1, 2, 3, 10]).is_err());
    }

    #[test]
    fn guess_parse_formats() {
        let expected = Guess::new([3, 2, 8, 5]).unwrap();
        assert_eq!("3285".parse::<Guess>().unwrap(), expected);
        assert_eq!("3 2 8 5".parse::<Guess>().unwrap(), expected);
        assert_eq!(" 3,2,8,5 ".parse::<Guess>().unwrap(), expected);
    }

    #[test]
    fn guess_parse_invalid() {
        assert!(matches!(
            "123".parse::<Guess>(),
            Err(GuessError::InvalidLength(3))
        ));
        assert!(matches!(
            "12345".parse::<Guess>(),
            Err(GuessError::InvalidLength(5))
        ));
        assert!(matches!(
            "12a4".parse::<Guess>(),
            Err(GuessError::InvalidDigit('a'))
        ));
        assert!(matches!(
            "1204".parse::<Guess>(),
            Err(GuessError::InvalidDigit('0'))
        ));
        assert!(matches!(
            "1214".parse::<Guess>(),
            Err(GuessError::RepeatedDigit(1))
        ));
    }

    #[test]
    fn guess_lookup() {
        let guess = Guess::new([7, 3, 9, 1]).unwrap();
        assert_eq!(guess.digit_at(2), 9);
        assert!(guess.contains(7));
        assert!(!guess.contains(4));
        assert_eq!(guess.position_of(1), Some(3));
        assert_eq!(guess.position_of(5), None);
    }

    #[test]
    fn guess_substitution_keeps_digits_distinct() {
        let guess = Guess::new([1, 2, 3, 9]).unwrap();

        let changed = guess.with_digit(3, 4).unwrap();
        assert_eq!(changed.digits(), &[1, 2, 3, 4]);

        // 2 already sits at position 1
        assert!(guess.with_digit(3, 2).is_none());
        // Same digit at same position is a no-op
        assert_eq!(guess.with_digit(0, 1), Some(guess));
    }

    #[test]
    fn guess_swap_and_diff() {
        let guess = Guess::new([1, 2, 4, 3]).unwrap();
        let swapped = guess.swapped(2, 3);

        assert_eq!(swapped.digits(), &[1, 2, 3, 4]);
        assert_eq!(guess.differing_positions(&swapped), vec![2, 3]);
        assert!(guess.differing_positions(&guess).is_empty());
    }

    #[test]
    fn guess_error_display() {
        assert_eq!(
            GuessError::InvalidLength(2).to_string(),
            "Code must be exactly 4 digits, got 2"
        );
        assert_eq!(
            GuessError::RepeatedDigit(5).to_string(),
            "Code digits must be distinct, 5 repeats"
        );
    }
}
