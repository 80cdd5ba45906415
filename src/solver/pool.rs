//! Digit pool and guess initializer
//!
//! The pool is the set of digits still considered possibly present in the
//! secret. It starts as 1-9 and only ever shrinks.

use super::EngineError;
use crate::core::{CODE_LENGTH, Guess, MAX_DIGIT, MIN_DIGIT};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Set of candidate digits, stored as a bit mask (bit `d` set = digit `d` possible)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitPool(u16);

impl DigitPool {
    const FULL_MASK: u16 = 0b11_1111_1110;

    /// All digits 1-9
    #[must_use]
    pub const fn full() -> Self {
        Self(Self::FULL_MASK)
    }

    /// Exactly the digits of `guess`
    #[must_use]
    pub fn of_guess(guess: &Guess) -> Self {
        Self(guess.digits().iter().fold(0, |mask, &d| mask | (1 << d)))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, digit: u8) -> bool {
        digit >= MIN_DIGIT && digit <= MAX_DIGIT && self.0 & (1 << digit) != 0
    }

    /// Remove a digit; returns whether it was present
    pub fn exclude(&mut self, digit: u8) -> bool {
        let present = self.contains(digit);
        if present {
            self.0 &= !(1 << digit);
        }
        present
    }

    /// Shrink the pool to the digits of `guess`
    pub fn restrict_to(&mut self, guess: &Guess) {
        self.0 &= Self::of_guess(guess).0;
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every digit of `other` is also in this pool
    #[must_use]
    pub const fn is_superset_of(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    /// Digits in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (MIN_DIGIT..=MAX_DIGIT).filter(move |&d| self.contains(d))
    }

    /// Digits no longer in the pool
    pub fn excluded(self) -> impl Iterator<Item = u8> {
        (MIN_DIGIT..=MAX_DIGIT).filter(move |&d| !self.contains(d))
    }
}

impl Default for DigitPool {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for DigitPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, d) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "}}")
    }
}

/// Draw a fresh guess of four distinct digits from `pool`
///
/// Used for the opening guess and to restart after a (0, 0) response, with
/// the eliminated digits already removed from the pool.
///
/// # Errors
/// Returns `EngineError::PoolExhausted` if fewer than four digits remain.
pub fn initial_guess<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &DigitPool,
) -> Result<Guess, EngineError> {
    let mut eligible: Vec<u8> = pool.iter().collect();
    if eligible.len() < CODE_LENGTH {
        return Err(EngineError::PoolExhausted {
            remaining: eligible.len(),
        });
    }

    eligible.shuffle(rng);

    let mut digits = [0u8; CODE_LENGTH];
    digits.copy_from_slice(&eligible[..CODE_LENGTH]);
    Ok(Guess::from_digits_unchecked(digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn full_pool_has_nine_digits() {
        let pool = DigitPool::full();
        assert_eq!(pool.len(), 9);
        assert_eq!(pool.iter().collect::<Vec<_>>(), (1..=9).collect::<Vec<_>>());
        assert!(!pool.contains(0));
        assert!(!pool.contains(10));
        assert_eq!(pool.excluded().count(), 0);
    }

    #[test]
    fn exclusion_is_sticky() {
        let mut pool = DigitPool::full();
        assert!(pool.exclude(5));
        assert!(!pool.exclude(5));
        assert!(!pool.contains(5));
        assert_eq!(pool.len(), 8);
        assert_eq!(pool.excluded().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn restrict_to_guess_digits() {
        let mut pool = DigitPool::full();
        pool.exclude(9);
        pool.restrict_to(&"1243".parse().unwrap());

        assert_eq!(pool.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(DigitPool::full().is_superset_of(pool));
        assert!(!pool.is_superset_of(DigitPool::full()));
    }

    #[test]
    fn display_lists_digits() {
        let mut pool = DigitPool::full();
        for d in [1, 3, 5, 7, 9] {
            pool.exclude(d);
        }
        assert_eq!(pool.to_string(), "{2,4,6,8}");
    }

    #[test]
    fn initial_guess_distinct_and_in_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = DigitPool::full();
        for d in [5, 6, 7, 8] {
            pool.exclude(d);
        }

        for _ in 0..50 {
            let guess = initial_guess(&mut rng, &pool).unwrap();
            assert!(guess.digits().iter().all(|&d| pool.contains(d)));
            assert!(Guess::new(*guess.digits()).is_ok());
        }
    }

    #[test]
    fn initial_guess_fails_when_pool_too_small() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = DigitPool::full();
        for d in 1..=6 {
            pool.exclude(d);
        }

        assert_eq!(
            initial_guess(&mut rng, &pool),
            Err(EngineError::PoolExhausted { remaining: 3 })
        );
    }
}
