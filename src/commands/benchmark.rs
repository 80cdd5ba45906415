//! Benchmark command
//!
//! Measures engine performance across random secrets.

use super::test_all::run_session;
use crate::core::Guess;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Run benchmark on a set of secrets, one session after another
///
/// If `first_guess` is provided, every session opens with it instead of a
/// random draw.
#[must_use]
pub fn run_benchmark(secrets: &[Guess], seed: u64, first_guess: Option<Guess>) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for (i, &secret) in secrets.iter().enumerate() {
        let result = run_session(secret, seed.wrapping_add(i as u64), first_guess);
        if !result.success {
            continue;
        }

        let guesses = result.num_guesses;
        solved += 1;
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_secrets = secrets.len();

    BenchmarkResult {
        total_secrets,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        secrets_per_second: total_secrets as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::sample_secrets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample(count: usize) -> Vec<Guess> {
        sample_secrets(&mut StdRng::seed_from_u64(17), count)
    }

    #[test]
    fn benchmark_runs() {
        let secrets = sample(10);
        let result = run_benchmark(&secrets, 1, None);

        assert_eq!(result.total_secrets, 10);
        assert_eq!(result.solved, 10);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let secrets = sample(10);
        let result = run_benchmark(&secrets, 2, None);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_with_forced_first_guess() {
        let secrets = sample(5);
        let first: Guess = "1234".parse().unwrap();

        let result = run_benchmark(&secrets, 3, Some(first));

        assert_eq!(result.total_secrets, 5);
        assert!(result.average_guesses >= 1.0);
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let result = run_benchmark(&[], 0, None);

        assert_eq!(result.total_secrets, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let secrets = sample(10);
        let result = run_benchmark(&secrets, 4, None);

        // Average should be between min and max
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        for &guess_count in result.distribution.keys() {
            assert!((1..=crate::commands::MAX_TURNS).contains(&guess_count));
        }
    }
}
