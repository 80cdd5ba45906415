//! Worst-case partition size for a proposed guess
//!
//! Given a guess and the secrets still consistent with every recorded turn,
//! computes how many of them could remain after the guess is answered.

use crate::core::{Feedback, Guess};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// # Strategy
/// For each feedback that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use bulls_cows::core::Guess;
/// use bulls_cows::solver::ranking::max_partition;
///
/// let guess: Guess = "1234".parse().unwrap();
/// let candidates: Vec<Guess> = ["1234", "1243", "5678"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// // Every candidate answers differently
/// assert_eq!(max_partition(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn max_partition(guess: &Guess, candidates: &[Guess]) -> usize {
    group_by_feedback(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Number of distinct answers `guess` can receive from the candidates
#[must_use]
pub fn partition_count(guess: &Guess, candidates: &[Guess]) -> usize {
    group_by_feedback(guess, candidates).len()
}

/// Group candidates by the feedback they would give to `guess`
fn group_by_feedback(guess: &Guess, candidates: &[Guess]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::calculate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<Guess> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn empty_candidates() {
        let guess: Guess = "1234".parse().unwrap();
        assert_eq!(max_partition(&guess, &[]), 0);
    }

    #[test]
    fn all_same_feedback() {
        // 9 is in none of them and every candidate shares 1, 2 in place
        let guess: Guess = "1259".parse().unwrap();
        let candidates = codes(&["1234", "1243", "1267"]);
        assert_eq!(max_partition(&guess, &candidates), 3);
    }

    #[test]
    fn plateau_transpositions() {
        // The six transpositions of 1243 answer a swap of 2/3 as
        // (4,0) once, (0,4) once and (1,3) four times
        let guess: Guess = "1234".parse().unwrap();
        let candidates = codes(&["2143", "4213", "3241", "1423", "1342", "1234"]);
        assert_eq!(max_partition(&guess, &candidates), 4);
        assert_eq!(partition_count(&guess, &candidates), 3);
    }
}
