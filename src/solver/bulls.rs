//! Position-to-digit bindings proven by feedback

use crate::core::{CODE_LENGTH, Guess};
use std::fmt;

/// Partial mapping from guess position to the digit proven to sit there
///
/// Entries are only ever added. Binding a position twice with different
/// digits, or one digit at two positions, is a contradiction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BullsMap([Option<u8>; CODE_LENGTH]);

/// Why a binding could not be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindConflict {
    PositionOutOfRange { position: usize },
    PositionTaken { position: usize, existing: u8 },
    DigitBoundElsewhere { digit: u8, position: usize },
}

impl fmt::Display for BindConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfRange { position } => {
                write!(f, "position {position} is outside the code")
            }
            Self::PositionTaken { position, existing } => {
                write!(f, "position {position} is already bound to {existing}")
            }
            Self::DigitBoundElsewhere { digit, position } => {
                write!(f, "digit {digit} is already bound at position {position}")
            }
        }
    }
}

impl BullsMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `digit` sits at `position`
    ///
    /// Returns `Ok(true)` for a new fact, `Ok(false)` if it was already known.
    ///
    /// # Errors
    /// Returns `BindConflict` if the fact contradicts an existing binding or
    /// `position` is not below `CODE_LENGTH`.
    pub fn bind(&mut self, position: usize, digit: u8) -> Result<bool, BindConflict> {
        if position >= CODE_LENGTH {
            return Err(BindConflict::PositionOutOfRange { position });
        }
        match self.0[position] {
            Some(existing) if existing == digit => return Ok(false),
            Some(existing) => return Err(BindConflict::PositionTaken { position, existing }),
            None => {}
        }
        if let Some(other) = self.position_of(digit) {
            return Err(BindConflict::DigitBoundElsewhere {
                digit,
                position: other,
            });
        }
        self.0[position] = Some(digit);
        Ok(true)
    }

    /// Digit bound at `position`; `None` also for positions past the code
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<u8> {
        self.0.get(position).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn is_bound(&self, position: usize) -> bool {
        self.get(position).is_some()
    }

    /// Position a digit is bound to, if any
    #[must_use]
    pub fn position_of(&self, digit: u8) -> Option<usize> {
        self.0.iter().position(|&d| d == Some(digit))
    }

    /// Number of bound positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All four positions are bound: the secret is known
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == CODE_LENGTH
    }

    /// Positions without a binding, ascending
    #[must_use]
    pub fn unbound_positions(&self) -> Vec<usize> {
        (0..CODE_LENGTH).filter(|&i| !self.is_bound(i)).collect()
    }

    /// Bound (position, digit) pairs, ascending by position
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (i, d)))
    }

    /// Whether `guess` holds every bound digit at its position
    #[must_use]
    pub fn is_respected_by(&self, guess: &Guess) -> bool {
        self.iter().all(|(i, d)| guess.digit_at(i) == d)
    }

    /// Force every bound digit into its position
    ///
    /// A bound digit found elsewhere in the guess is swapped into place so
    /// the result keeps four distinct digits.
    #[must_use]
    pub fn enforce(&self, guess: &Guess) -> Guess {
        let mut forced = *guess;
        for (position, digit) in self.iter() {
            if forced.digit_at(position) == digit {
                continue;
            }
            forced = match forced.position_of(digit) {
                Some(other) => forced.swapped(position, other),
                None => forced.with_digit(position, digit).unwrap_or(forced),
            };
        }
        forced
    }
}

impl fmt::Display for BullsMap {
    /// Renders known positions as digits and unknown ones as `_`, e.g. "1_3_"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            match d {
                Some(d) => write!(f, "{d}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Guess {
        s.parse().unwrap()
    }

    #[test]
    fn bind_records_new_facts_once() {
        let mut bulls = BullsMap::new();
        assert_eq!(bulls.bind(3, 4), Ok(true));
        assert_eq!(bulls.bind(3, 4), Ok(false));
        assert_eq!(bulls.get(3), Some(4));
        assert_eq!(bulls.len(), 1);
        assert_eq!(bulls.unbound_positions(), vec![0, 1, 2]);
    }

    #[test]
    fn bind_never_overwrites() {
        let mut bulls = BullsMap::new();
        bulls.bind(0, 1).unwrap();

        assert_eq!(
            bulls.bind(0, 2),
            Err(BindConflict::PositionTaken {
                position: 0,
                existing: 1
            })
        );
        assert_eq!(
            bulls.bind(2, 1),
            Err(BindConflict::DigitBoundElsewhere {
                digit: 1,
                position: 0
            })
        );
        assert_eq!(bulls.get(0), Some(1));
        assert!(!bulls.is_bound(2));
    }

    #[test]
    fn positions_past_the_code_are_rejected() {
        let mut bulls = BullsMap::new();
        assert_eq!(
            bulls.bind(4, 1),
            Err(BindConflict::PositionOutOfRange { position: 4 })
        );
        assert_eq!(bulls.get(4), None);
        assert!(!bulls.is_bound(9));
        assert!(bulls.is_empty());
    }

    #[test]
    fn completeness() {
        let mut bulls = BullsMap::new();
        for (i, d) in [(0, 5), (1, 6), (2, 7)] {
            bulls.bind(i, d).unwrap();
            assert!(!bulls.is_complete());
        }
        bulls.bind(3, 8).unwrap();
        assert!(bulls.is_complete());
        assert!(bulls.unbound_positions().is_empty());
        assert_eq!(bulls.to_string(), "5678");
    }

    #[test]
    fn enforce_replaces_missing_digit() {
        let mut bulls = BullsMap::new();
        bulls.bind(1, 2).unwrap();

        let forced = bulls.enforce(&code("1567"));
        assert_eq!(forced, code("1267"));
        assert!(bulls.is_respected_by(&forced));
    }

    #[test]
    fn enforce_swaps_misplaced_digit() {
        let mut bulls = BullsMap::new();
        bulls.bind(0, 3).unwrap();
        bulls.bind(2, 4).unwrap();

        let forced = bulls.enforce(&code("4132"));
        assert_eq!(forced, code("3142"));
        assert!(bulls.is_respected_by(&forced));
        assert!(!bulls.is_respected_by(&code("4132")));
    }

    #[test]
    fn display_marks_unknown_positions() {
        let mut bulls = BullsMap::new();
        bulls.bind(0, 1).unwrap();
        bulls.bind(2, 3).unwrap();
        assert_eq!(bulls.to_string(), "1_3_");
        assert_eq!(bulls.iter().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    }
}
