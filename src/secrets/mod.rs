//! The secret universe
//!
//! Every code of four distinct digits 1-9: 9 × 8 × 7 × 6 = 3024 secrets.

pub mod loader;

use crate::core::{CODE_LENGTH, Guess, MAX_DIGIT, MIN_DIGIT};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Number of valid secrets
pub const SECRET_COUNT: usize = 3024;

/// All valid secrets in lexicographic order
///
/// # Examples
/// ```
/// use bulls_cows::secrets::{SECRET_COUNT, all_secrets};
///
/// let secrets = all_secrets();
/// assert_eq!(secrets.len(), SECRET_COUNT);
/// assert_eq!(secrets[0].to_string(), "1234");
/// assert_eq!(secrets[SECRET_COUNT - 1].to_string(), "9876");
/// ```
#[must_use]
pub fn all_secrets() -> Vec<Guess> {
    let mut secrets = Vec::with_capacity(SECRET_COUNT);
    let mut digits = [0u8; CODE_LENGTH];
    extend_secrets(&mut digits, 0, 0, &mut secrets);
    secrets
}

/// Fill `digits[depth..]` with every arrangement of unused digits
fn extend_secrets(digits: &mut [u8; CODE_LENGTH], depth: usize, used: u16, out: &mut Vec<Guess>) {
    if depth == CODE_LENGTH {
        out.push(Guess::from_digits_unchecked(*digits));
        return;
    }

    for d in MIN_DIGIT..=MAX_DIGIT {
        if used & (1 << d) == 0 {
            digits[depth] = d;
            extend_secrets(digits, depth + 1, used | (1 << d), out);
        }
    }
}

/// Pick a secret uniformly at random
pub fn random_secret<R: Rng + ?Sized>(rng: &mut R) -> Guess {
    let mut digits: Vec<u8> = (MIN_DIGIT..=MAX_DIGIT).collect();
    let mut picked = [0u8; CODE_LENGTH];
    for slot in &mut picked {
        let i = rng.random_range(0..digits.len());
        *slot = digits.swap_remove(i);
    }
    Guess::from_digits_unchecked(picked)
}

/// Pick `count` distinct secrets at random
///
/// Returns every secret when `count` exceeds the universe.
pub fn sample_secrets<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Guess> {
    all_secrets()
        .choose_multiple(rng, count.min(SECRET_COUNT))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    #[test]
    fn universe_size_and_order() {
        let secrets = all_secrets();
        assert_eq!(secrets.len(), SECRET_COUNT);
        assert!(secrets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn universe_holds_only_valid_codes() {
        for secret in all_secrets() {
            assert!(Guess::new(*secret.digits()).is_ok(), "{secret}");
        }
    }

    #[test]
    fn random_secret_is_valid() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let secret = random_secret(&mut rng);
            assert!(Guess::new(*secret.digits()).is_ok(), "{secret}");
        }
    }

    #[test]
    fn sample_is_distinct_and_capped() {
        let mut rng = StdRng::seed_from_u64(5);

        let sample = sample_secrets(&mut rng, 100);
        assert_eq!(sample.len(), 100);
        assert_eq!(sample.iter().collect::<FxHashSet<_>>().len(), 100);

        assert_eq!(sample_secrets(&mut rng, 10_000).len(), SECRET_COUNT);
    }
}
