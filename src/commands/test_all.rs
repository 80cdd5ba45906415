//! Test all secrets - comprehensive engine evaluation
//!
//! Runs one session against every valid secret and generates statistics.

use super::MAX_TURNS;
use super::solve::new_engine;
use crate::core::{Feedback, Guess};
use crate::solver::TurnOutcome;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: Guess,
    pub guesses: Vec<Guess>,
    pub num_guesses: usize,
    pub success: bool,
    pub error: Option<String>,
    pub duration: Duration,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub best_secret: Option<(Guess, usize)>,
    pub worst_secrets: Vec<(Guess, usize)>,
    pub failures: Vec<(Guess, String)>,
}

/// Play one full session against `secret`, answering truthfully
#[must_use]
pub fn run_session(secret: Guess, seed: u64, first_guess: Option<Guess>) -> SecretTestResult {
    let start = Instant::now();
    let mut engine = new_engine(seed, first_guess);
    let mut success = false;
    let mut error = None;

    for _ in 0..MAX_TURNS {
        let guess = engine.submit_guess();
        match engine.record(Feedback::calculate(&guess, &secret)) {
            Ok(TurnOutcome::Solved(_)) => {
                success = true;
                break;
            }
            Ok(TurnOutcome::Continue(_)) => {}
            Err(e) => {
                error = Some(e.to_string());
                break;
            }
        }
    }

    let guesses = engine.history().to_vec();
    SecretTestResult {
        secret,
        num_guesses: guesses.len(),
        guesses,
        success,
        error,
        duration: start.elapsed(),
    }
}

/// Run the engine on every given secret (or a limited subset) in parallel
///
/// Each session gets its own engine seeded from `seed` and the secret's
/// index, so a run is reproducible.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_test_all(
    secrets: &[Guess],
    limit: Option<usize>,
    seed: u64,
    first_guess: Option<Guess>,
) -> TestAllStatistics {
    let test_secrets: Vec<Guess> = secrets
        .iter()
        .take(limit.unwrap_or(secrets.len()))
        .copied()
        .collect();

    println!("🎯 Testing {} secrets...", test_secrets.len());

    // Progress bar
    let pb = ProgressBar::new(test_secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<SecretTestResult> = test_secrets
        .par_iter()
        .enumerate()
        .map(|(idx, &secret)| {
            let result = run_session(secret, seed.wrapping_add(idx as u64), first_guess);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut stats = summarize(&results);
    stats.total_time = total_start.elapsed();
    stats
}

/// Fold per-secret results into statistics
#[must_use]
pub fn summarize(results: &[SecretTestResult]) -> TestAllStatistics {
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for r in &solved {
        *guess_distribution.entry(r.num_guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let best_secret = solved
        .iter()
        .min_by_key(|r| r.num_guesses)
        .map(|r| (r.secret, r.num_guesses));

    let mut worst_secrets: Vec<(Guess, usize)> =
        solved.iter().map(|r| (r.secret, r.num_guesses)).collect();
    worst_secrets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_secrets.truncate(10);

    let failures = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| {
            let reason = r
                .error
                .clone()
                .unwrap_or_else(|| format!("not solved within {MAX_TURNS} turns"));
            (r.secret, reason)
        })
        .collect();

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time: results.iter().map(|r| r.duration).sum(),
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        best_secret,
        worst_secrets,
        failures,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    if stats.total_secrets == 0 {
        return;
    }
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_secrets as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_secrets as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Guess range:          {} - {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:      {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_secrets as f64
    );

    // Guess distribution
    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in stats.min_guesses..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (*count * 40 / max_count).max(usize::from(*count > 0));
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    // Best and worst cases
    if let Some((secret, guesses)) = &stats.best_secret {
        println!("\n✨ {}", "Best Performance".green().bold());
        println!(
            "  {} solved in {} guess{}",
            secret.to_string().bright_green(),
            guesses,
            if *guesses == 1 { "" } else { "es" }
        );
    }

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.worst_secrets.iter().take(5) {
            println!("  {} ({} guesses)", secret.to_string().yellow(), guesses);
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Failures".red().bold());
        for (secret, reason) in stats.failures.iter().take(10) {
            println!("  {}: {reason}", secret.to_string().red());
        }
    }
}
