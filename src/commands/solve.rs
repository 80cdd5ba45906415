//! Secret solving command
//!
//! Plays one session against a known secret and returns the solution path.

use crate::core::{Feedback, Guess};
use crate::solver::ranking::max_partition;
use crate::solver::{Engine, EngineError, Inference, Phase, Turn, TurnOutcome};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_turns: usize,
    pub seed: Option<u64>,
    pub first_guess: Option<Guess>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_turns: super::MAX_TURNS,
            seed: None,
            first_guess: None,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub secret: Guess,
    pub seed: u64,
}

/// A single turn in the solution
pub struct SolveStep {
    pub guess: Guess,
    pub feedback: Feedback,
    pub phase: Phase,
    pub inference: Option<Inference>,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub worst_case: usize,
}

/// Build an engine for a driver, honouring an optional seed and opening guess
#[must_use]
pub fn new_engine(seed: u64, first_guess: Option<Guess>) -> Engine {
    match first_guess {
        Some(first) => Engine::with_first_guess(first, seed),
        None => Engine::with_seed(seed),
    }
}

/// Rebuild a session from its recorded turns
///
/// With the same seed and opening guess the engine proposes the same
/// guesses, so replaying all but the last turn undoes it. Turns whose
/// guess differs from the engine's proposal are replayed as overrides.
///
/// # Errors
///
/// Returns the first `EngineError` raised while replaying.
pub fn replay_session(
    seed: u64,
    first_guess: Option<Guess>,
    turns: &[Turn],
) -> Result<Engine, EngineError> {
    let mut engine = new_engine(seed, first_guess);
    for turn in turns {
        if engine.submit_guess() != turn.guess {
            engine.override_guess(turn.guess)?;
        }
        engine.record(turn.feedback)?;
    }
    Ok(engine)
}

/// Solve a specific secret, answering the engine truthfully
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not four distinct digits 1-9
/// - The engine aborts the session
pub fn solve_secret(config: SolveConfig) -> Result<SolveResult, String> {
    let secret: Guess = config
        .secret
        .parse()
        .map_err(|e| format!("Invalid secret: {e}"))?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut engine = new_engine(seed, config.first_guess);

    let mut steps: Vec<SolveStep> = Vec::new();

    for _ in 0..config.max_turns {
        let candidates_before = engine.candidates_remaining();
        let guess = engine.submit_guess();
        let worst_case = max_partition(&guess, engine.candidates());
        let feedback = Feedback::calculate(&guess, &secret);

        let outcome = engine.record(feedback).map_err(|e| e.to_string())?;

        steps.push(SolveStep {
            guess,
            feedback,
            phase: engine.phase(),
            inference: engine.last_inference(),
            candidates_before,
            candidates_after: engine.candidates_remaining(),
            worst_case,
        });

        if let TurnOutcome::Solved(_) = outcome {
            return Ok(SolveResult {
                success: true,
                steps,
                secret,
                seed,
            });
        }
    }

    // Turn limit reached
    Ok(SolveResult {
        success: false,
        steps,
        secret,
        seed,
    })
}
