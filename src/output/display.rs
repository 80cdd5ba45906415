//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_badge};
use crate::commands::{BenchmarkResult, ScoreResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    if verbose {
        println!("Seed:    {}", result.seed);
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {:2}: {} {} {}",
            turn,
            step.guess.to_string().bright_white().bold(),
            feedback_badge(step.feedback),
            step.feedback.to_string().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {} (worst case {})",
                step.candidates_before, step.candidates_after, step.worst_case
            );
            println!("  Phase:      {}", step.phase);
            if let Some(inference) = step.inference {
                println!("  Learned:    {inference}");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} vs {} ",
        "SCORE:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold(),
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🐂 {}  {} bulls, {} cows",
        feedback_badge(result.feedback),
        result.feedback.bulls().to_string().green().bold(),
        result.feedback.cows().to_string().yellow().bold()
    );

    let bar = create_progress_bar(
        result.worst_case as f64,
        result.total_secrets as f64,
        30,
    );
    println!(
        "\n📊 As an opening guess against {} possible secrets:",
        result.total_secrets
    );
    println!("   Distinct answers: {}", result.partitions);
    println!(
        "   Worst case:       [{}] {}",
        bar.yellow(),
        format!("{} secrets remain", result.worst_case).bright_yellow()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_secrets);
    if result.solved < result.total_secrets {
        println!(
            "   Unsolved:         {}",
            format!("{}", result.total_secrets - result.solved).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.secrets_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in result.min_guesses..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
