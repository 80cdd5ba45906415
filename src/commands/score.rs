//! Guess scoring command
//!
//! Scores a guess against a secret and measures how well the guess splits
//! the full secret universe.

use crate::core::{Feedback, Guess};
use crate::secrets::all_secrets;
use crate::solver::ranking::{max_partition, partition_count};

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Guess,
    pub guess: Guess,
    pub feedback: Feedback,
    /// Distinct answers the guess can receive as an opening move
    pub partitions: usize,
    /// Largest group of secrets sharing one answer
    pub worst_case: usize,
    pub total_secrets: usize,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code is not four distinct digits 1-9.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret: Guess = secret.parse().map_err(|e| format!("Invalid secret: {e}"))?;
    let guess: Guess = guess.parse().map_err(|e| format!("Invalid guess: {e}"))?;

    let universe = all_secrets();

    Ok(ScoreResult {
        secret,
        guess,
        feedback: Feedback::calculate(&guess, &secret),
        partitions: partition_count(&guess, &universe),
        worst_case: max_partition(&guess, &universe),
        total_secrets: universe.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_known_pair() {
        let result = score_guess("3285", "3251").unwrap();

        assert_eq!(result.feedback, Feedback::new(2, 1).unwrap());
        assert_eq!(result.total_secrets, 3024);
    }

    #[test]
    fn score_invalid_codes() {
        assert!(score_guess("3385", "1234").is_err());
        assert!(score_guess("3285", "12a4").is_err());
    }

    #[test]
    fn opening_partitions() {
        let result = score_guess("1234", "1234").unwrap();

        assert!(result.feedback.is_solved());
        // Every (bulls, cows) pair with bulls + cows <= 4 except (3,1)
        assert_eq!(result.partitions, 14);
        assert!(result.worst_case < result.total_secrets);
    }
}
