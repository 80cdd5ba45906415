//! Simple interactive CLI mode
//!
//! Text-based session without TUI: the engine guesses, the player scores

use super::solve::{new_engine, replay_session};
use crate::core::{Feedback, Guess};
use crate::output::formatters::feedback_badge;
use crate::solver::{Engine, Turn, TurnOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Feedback(Feedback),
    Override(Guess),
    New,
    Undo,
    Quit,
    Invalid(String),
}

/// Interpret a line typed at the feedback prompt
#[must_use]
pub fn parse_command(input: &str) -> SimpleCommand {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "quit" | "q" | "exit" => SimpleCommand::Quit,
        "new" | "n" => SimpleCommand::New,
        "undo" | "u" => SimpleCommand::Undo,
        "win" | "correct" | "yes" | "solved" => SimpleCommand::Feedback(Feedback::SOLVED),
        _ => {
            if let Some(code) = input.strip_prefix("try ") {
                return match code.parse() {
                    Ok(guess) => SimpleCommand::Override(guess),
                    Err(e) => SimpleCommand::Invalid(e.to_string()),
                };
            }
            match input.parse() {
                Ok(feedback) => SimpleCommand::Feedback(feedback),
                Err(e) => SimpleCommand::Invalid(e.to_string()),
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading player input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(seed: Option<u64>, first_guess: Option<Guess>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Bulls and Cows Solver - Interactive Mode          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a secret: four different digits from 1 to 9.");
    println!("After each guess, enter bulls and cows:\n");
    println!("  - Bulls: right digit in the right place");
    println!("  - Cows:  right digit in the wrong place");
    println!("  - Type them as '21', '2 1' or '2b1c', or 'win' if I got it!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last answer,");
    println!("          'try 1234' to make me ask a specific guess\n");

    let mut seed = seed.unwrap_or_else(rand::random);
    let mut engine = new_engine(seed, first_guess);

    loop {
        let guess = engine.submit_guess();
        let turn = engine.turns() + 1;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {} candidates remaining | phase: {} | bulls: {} | pool: {}",
            engine.candidates_remaining(),
            engine.phase(),
            engine.bulls(),
            engine.pool()
        );
        println!("────────────────────────────────────────────────────────────");
        println!("\n🐂 My guess: {}\n", guess.to_string().bright_white().bold());

        let feedback = loop {
            match parse_command(&get_user_input("Bulls and cows (or command)")?) {
                SimpleCommand::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                SimpleCommand::New => {
                    seed = rand::random();
                    engine = new_engine(seed, first_guess);
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                SimpleCommand::Undo => {
                    match undo(&engine, seed, first_guess) {
                        Some(Ok(previous)) => {
                            engine = previous;
                            println!("✓ Undone! Back to turn {}\n", engine.turns() + 1);
                            break None;
                        }
                        Some(Err(e)) => println!("❌ Cannot undo: {e}\n"),
                        None => println!("Nothing to undo!\n"),
                    }
                }
                SimpleCommand::Override(code) => match engine.override_guess(code) {
                    Ok(()) => break None,
                    Err(e) => println!("❌ {e}\n"),
                },
                SimpleCommand::Feedback(feedback) => break Some(feedback),
                SimpleCommand::Invalid(reason) => {
                    println!("❌ {reason}. Use e.g. '21', '2 1', 'win' or a command\n");
                }
            }
        };

        let Some(feedback) = feedback else {
            continue;
        };

        match engine.record(feedback) {
            Ok(TurnOutcome::Solved(secret)) => {
                print_victory(&engine, secret);

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        seed = rand::random();
                        engine = new_engine(seed, first_guess);
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Ok(TurnOutcome::Continue(_)) => {
                if let Some(inference) = engine.last_inference() {
                    println!("💡 {inference}\n");
                }
            }
            Err(e) if e.is_fatal() => {
                println!("\n❌ {e}");
                println!("Some answer must have been wrong. Undoing your last answer.\n");
                if let Some(Ok(previous)) = undo(&engine, seed, first_guess) {
                    engine = previous;
                } else {
                    seed = rand::random();
                    engine = new_engine(seed, first_guess);
                    println!("🔄 New game started!\n");
                }
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

/// Replay the session without its last turn
fn undo(engine: &Engine, seed: u64, first_guess: Option<Guess>) -> Option<Result<Engine, String>> {
    let turns: Vec<Turn> = engine.turns_iter().collect();
    let (_, kept) = turns.split_last()?;
    Some(replay_session(seed, first_guess, kept).map_err(|e| e.to_string()))
}

fn print_victory(engine: &Engine, secret: Guess) {
    let turns = engine.turns();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🐂 🐄  B U L L S   A N D   C O W S   S O L V E D !  🐄 🐂"
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Your secret was {}, found in {} {}",
        secret.to_string().bright_yellow().bold(),
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, turn) in engine.turns_iter().enumerate() {
        println!(
            "    {}. {} {} {}",
            (i + 1).to_string().bright_black(),
            turn.guess.to_string().bright_white().bold(),
            feedback_badge(turn.feedback),
            turn.feedback.to_string().bright_black()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
