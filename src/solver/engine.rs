//! Deduction engine: one Bulls and Cows session
//!
//! The engine proposes a guess, takes the bulls/cows answer, and turns the
//! difference from the previous turn into permanent facts (bound positions
//! and excluded digits). The next guess changes one unbound position at a
//! time so every answer can be read against the one before it.

use super::bulls::BullsMap;
use super::deduction::{Inference, Turn, deduce};
use super::moves::{select_move, substitutions, swaps};
use super::pool::{DigitPool, initial_guess};
use super::EngineError;
use crate::core::{Feedback, Guess};
use crate::secrets::all_secrets;
use log::{debug, info, warn};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No feedback recorded yet
    Initial,
    /// Substituting one digit per turn
    Exploring,
    /// All four digits known; swapping unbound positions
    Plateau,
    /// The secret was guessed
    Solved,
    /// A fatal error ended the session
    Aborted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initial => "initial",
            Self::Exploring => "exploring",
            Self::Plateau => "plateau",
            Self::Solved => "solved",
            Self::Aborted => "aborted",
        };
        write!(f, "{name}")
    }
}

/// What a recorded turn led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Ask this guess next
    Continue(Guess),
    /// This guess was the secret
    Solved(Guess),
}

/// A single puzzle-solving session
///
/// Sessions are independent: each owns its state and random source, so
/// many can run side by side on different threads.
///
/// # Examples
/// ```
/// use bulls_cows::core::{Feedback, Guess};
/// use bulls_cows::solver::{Engine, TurnOutcome};
///
/// let secret: Guess = "1234".parse().unwrap();
/// let mut engine = Engine::with_seed(7);
///
/// loop {
///     let guess = engine.submit_guess();
///     match engine.record(Feedback::calculate(&guess, &secret)).unwrap() {
///         TurnOutcome::Solved(found) => {
///             assert_eq!(found, secret);
///             break;
///         }
///         TurnOutcome::Continue(_) => {}
///     }
/// }
/// assert!(engine.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    rng: StdRng,
    pool: DigitPool,
    bulls: BullsMap,
    current: Guess,
    history: Vec<Guess>,
    asked: FxHashSet<Guess>,
    feedback: Vec<Feedback>,
    /// Secrets consistent with every recorded turn, kept sorted
    candidates: Vec<Guess>,
    phase: Phase,
    last_inference: Option<Inference>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Start a session seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Start a reproducible session
    ///
    /// The same seed and the same answers always produce the same guesses.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Start a reproducible session with a chosen opening guess
    #[must_use]
    pub fn with_first_guess(first: Guess, seed: u64) -> Self {
        Self::start(StdRng::seed_from_u64(seed), first)
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let first = initial_guess(&mut rng, &DigitPool::full())
            .expect("full pool holds nine digits");
        Self::start(rng, first)
    }

    fn start(rng: StdRng, first: Guess) -> Self {
        debug!("new session, opening with {first}");
        Self {
            rng,
            pool: DigitPool::full(),
            bulls: BullsMap::new(),
            current: first,
            history: Vec::new(),
            asked: FxHashSet::default(),
            feedback: Vec::new(),
            candidates: all_secrets(),
            phase: Phase::Initial,
            last_inference: None,
        }
    }

    /// The guess awaiting feedback
    ///
    /// Calling this repeatedly without recording feedback returns the same
    /// guess.
    #[inline]
    #[must_use]
    pub const fn submit_guess(&self) -> Guess {
        self.current
    }

    /// Record raw bulls/cows counts for the current guess
    ///
    /// # Errors
    /// `EngineError::InvalidFeedback` if the counts are out of range; the
    /// session is left untouched. Otherwise the same as [`Engine::record`].
    pub fn record_feedback(&mut self, bulls: u8, cows: u8) -> Result<TurnOutcome, EngineError> {
        if self.is_over() {
            return Err(EngineError::SessionOver);
        }
        let feedback = Feedback::new(bulls, cows)?;
        self.record(feedback)
    }

    /// Record feedback for the current guess and pick the next one
    ///
    /// # Errors
    /// - `EngineError::SessionOver` if the session already ended
    /// - `EngineError::Contradiction`, `PoolExhausted` or `NoSwapAvailable`
    ///   if no secret fits the answers so far; the session is aborted
    pub fn record(&mut self, feedback: Feedback) -> Result<TurnOutcome, EngineError> {
        if self.is_over() {
            return Err(EngineError::SessionOver);
        }

        self.advance(feedback).inspect_err(|e| {
            if e.is_fatal() {
                warn!("session aborted after {} turns: {e}", self.turns());
                self.set_phase(Phase::Aborted);
            }
        })
    }

    /// Replace the pending guess with one chosen by the caller
    ///
    /// # Errors
    /// `EngineError::RejectedGuess` if the guess was already asked, moves a
    /// bound digit, or uses an excluded digit. `EngineError::SessionOver`
    /// once the session has ended.
    pub fn override_guess(&mut self, guess: Guess) -> Result<(), EngineError> {
        if self.is_over() {
            return Err(EngineError::SessionOver);
        }

        let reason = if self.asked.contains(&guess) {
            Some("already asked")
        } else if !self.bulls.is_respected_by(&guess) {
            Some("moves a known bull")
        } else if !self.pool.is_superset_of(DigitPool::of_guess(&guess)) {
            Some("uses an excluded digit")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(EngineError::RejectedGuess { guess, reason });
        }

        debug!("guess overridden: {} -> {guess}", self.current);
        self.current = guess;
        Ok(())
    }

    /// True once bulls == 4 has been recorded
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// True once the session is solved or aborted
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Solved | Phase::Aborted)
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Guesses asked so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Feedback per asked guess, parallel to [`Engine::history`]
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// Recorded turns as (guess, feedback) pairs
    pub fn turns_iter(&self) -> impl Iterator<Item = Turn> + '_ {
        self.history
            .iter()
            .zip(&self.feedback)
            .map(|(&guess, &feedback)| Turn::new(guess, feedback))
    }

    #[must_use]
    pub const fn bulls(&self) -> &BullsMap {
        &self.bulls
    }

    #[must_use]
    pub const fn pool(&self) -> DigitPool {
        self.pool
    }

    /// Number of recorded turns
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// How many secrets still fit every answer
    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Secrets that still fit every answer, in ascending order
    #[must_use]
    pub fn candidates(&self) -> &[Guess] {
        &self.candidates
    }

    /// What the latest turn revealed, if any turn was recorded
    #[must_use]
    pub const fn last_inference(&self) -> Option<Inference> {
        self.last_inference
    }

    fn advance(&mut self, feedback: Feedback) -> Result<TurnOutcome, EngineError> {
        let guess = self.current;
        let previous = self.turns_iter().last();
        let latest = Turn::new(guess, feedback);

        self.history.push(guess);
        self.asked.insert(guess);
        self.feedback.push(feedback);
        self.candidates
            .retain(|secret| Feedback::calculate(&guess, secret) == feedback);

        let inference = deduce(previous.as_ref(), &latest);
        self.last_inference = Some(inference);
        debug!(
            "turn {}: {guess} scored {feedback}, {} candidates left, {inference}",
            self.turns(),
            self.candidates.len()
        );

        if feedback.is_solved() {
            self.set_phase(Phase::Solved);
            return Ok(TurnOutcome::Solved(guess));
        }

        if feedback.is_zero() {
            return self.restart_without(guess);
        }

        self.apply(inference)?;

        if feedback.is_plateau() {
            self.enter_plateau(guess)?;
        } else if self.phase == Phase::Initial {
            self.set_phase(Phase::Exploring);
        }
        if self.phase == Phase::Plateau {
            self.complete_plateau()?;
        }

        self.check_consistent(guess, feedback)?;

        self.current = self.bulls.enforce(&self.current);
        self.current = self.choose_next()?;
        Ok(TurnOutcome::Continue(self.current))
    }

    fn check_consistent(&self, guess: Guess, feedback: Feedback) -> Result<(), EngineError> {
        if self.candidates.is_empty() {
            return Err(EngineError::Contradiction(format!(
                "no secret answers {guess} with {feedback} given the earlier turns"
            )));
        }
        Ok(())
    }

    /// Drop every digit of a (0, 0) guess and draw a fresh one
    fn restart_without(&mut self, guess: Guess) -> Result<TurnOutcome, EngineError> {
        if let Some(&digit) = guess
            .digits()
            .iter()
            .find(|&&d| self.bulls.position_of(d).is_some())
        {
            return Err(EngineError::Contradiction(format!(
                "{guess} scored nothing but {digit} is a known bull"
            )));
        }

        for &digit in guess.digits() {
            self.pool.exclude(digit);
        }
        debug!("{guess} missed entirely, pool now {}", self.pool);

        let fresh = initial_guess(&mut self.rng, &self.pool)?;
        self.check_consistent(guess, Feedback::ZERO)?;

        let fresh = self.bulls.enforce(&fresh);
        self.current = if self.asked.contains(&fresh) {
            self.jump()?
        } else {
            fresh
        };

        self.set_phase(Phase::Exploring);
        Ok(TurnOutcome::Continue(self.current))
    }

    fn apply(&mut self, inference: Inference) -> Result<(), EngineError> {
        match inference {
            Inference::Bull { position, digit } => self.bind(position, digit),
            Inference::Excluded { digit } => self.exclude(digit),
            Inference::SwapBulls { first, second } => {
                self.bind(first.0, first.1)?;
                self.bind(second.0, second.1)
            }
            Inference::Nothing(_) => Ok(()),
        }
    }

    fn bind(&mut self, position: usize, digit: u8) -> Result<(), EngineError> {
        if !self.pool.contains(digit) {
            return Err(EngineError::Contradiction(format!(
                "{digit} was excluded but now reads as a bull at position {}",
                position + 1
            )));
        }

        let added = self
            .bulls
            .bind(position, digit)
            .map_err(|conflict| EngineError::Contradiction(conflict.to_string()))?;
        if added {
            debug!("bulls map now {}", self.bulls);
        }
        Ok(())
    }

    fn exclude(&mut self, digit: u8) -> Result<(), EngineError> {
        if let Some(position) = self.bulls.position_of(digit) {
            return Err(EngineError::Contradiction(format!(
                "{digit} is a bull at position {} but now reads as absent",
                position + 1
            )));
        }

        if self.pool.exclude(digit) {
            debug!("pool now {}", self.pool);
        }
        Ok(())
    }

    /// All four digits of `guess` are in the secret
    fn enter_plateau(&mut self, guess: Guess) -> Result<(), EngineError> {
        if let Some((_, digit)) = self.bulls.iter().find(|&(_, d)| !guess.contains(d)) {
            return Err(EngineError::Contradiction(format!(
                "{guess} holds every secret digit but misses the known bull {digit}"
            )));
        }
        if !self.pool.is_superset_of(DigitPool::of_guess(&guess)) {
            return Err(EngineError::Contradiction(format!(
                "{guess} holds every secret digit but uses an excluded one"
            )));
        }

        self.pool.restrict_to(&guess);
        self.set_phase(Phase::Plateau);
        Ok(())
    }

    /// With the digit set known and three positions bound, the last is forced
    ///
    /// Swapping needs two unbound positions, so the forced arrangement must
    /// still be open; otherwise no swap is left to try.
    fn complete_plateau(&mut self) -> Result<(), EngineError> {
        let unbound = self.bulls.unbound_positions();
        if unbound.len() != 1 {
            return Ok(());
        }

        let free: Vec<u8> = self
            .pool
            .iter()
            .filter(|&d| self.bulls.position_of(d).is_none())
            .collect();
        let no_swap = EngineError::NoSwapAvailable {
            unbound: unbound.len(),
        };
        let &[digit] = free.as_slice() else {
            return Err(no_swap);
        };

        self.bind(unbound[0], digit)?;
        if self.asked.contains(&self.bulls.enforce(&self.current)) {
            return Err(no_swap);
        }
        Ok(())
    }

    fn choose_next(&mut self) -> Result<Guess, EngineError> {
        if self.bulls.is_complete() {
            let forced = self.bulls.enforce(&self.current);
            return if self.asked.contains(&forced) {
                self.jump()
            } else {
                Ok(forced)
            };
        }

        let moves = if self.phase == Phase::Plateau {
            swaps(&self.bulls)
        } else {
            let moves = substitutions(&self.current, &self.pool, &self.bulls);
            if moves.is_empty() {
                swaps(&self.bulls)
            } else {
                moves
            }
        };

        match select_move(
            &self.current,
            &moves,
            &self.candidates,
            &self.asked,
            &mut self.rng,
        ) {
            Some((mv, next)) => {
                debug!("{mv}: {} -> {next}", self.current);
                Ok(next)
            }
            None => {
                debug!("every move from {} was already asked", self.current);
                self.jump()
            }
        }
    }

    /// Leave the one-change path for a random consistent, unasked secret
    fn jump(&mut self) -> Result<Guess, EngineError> {
        let options: Vec<Guess> = self
            .candidates
            .iter()
            .copied()
            .filter(|c| {
                !self.asked.contains(c)
                    && self.bulls.is_respected_by(c)
                    && self.pool.is_superset_of(DigitPool::of_guess(c))
            })
            .collect();

        let target = options.choose(&mut self.rng).copied().ok_or_else(|| {
            EngineError::Contradiction("no untried secret fits every answer".to_string())
        })?;
        debug!("jumping to {target} ({} options)", options.len());
        Ok(target)
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            info!("phase {} -> {phase} after turn {}", self.phase, self.turns());
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CODE_LENGTH;
    use rayon::prelude::*;

    fn code(s: &str) -> Guess {
        s.parse().unwrap()
    }

    /// Play a full session against `secret`, checking the per-turn invariants
    fn play(secret: Guess, seed: u64) -> Engine {
        let mut engine = Engine::with_seed(seed);
        let mut seen = FxHashSet::default();

        for _ in 0..64 {
            let guess = engine.submit_guess();
            assert!(seen.insert(guess), "{secret}: {guess} asked twice");
            assert!(engine.bulls().is_respected_by(&guess), "{secret}: {guess}");
            assert!(
                engine.pool().is_superset_of(DigitPool::of_guess(&guess)),
                "{secret}: {guess} outside pool {}",
                engine.pool()
            );

            let bulls_before = *engine.bulls();
            let pool_before = engine.pool();

            let outcome = engine
                .record(Feedback::calculate(&guess, &secret))
                .unwrap_or_else(|e| panic!("{secret}: {e}"));

            for (position, digit) in bulls_before.iter() {
                assert_eq!(engine.bulls().get(position), Some(digit), "{secret}");
            }
            assert!(pool_before.is_superset_of(engine.pool()), "{secret}");
            for (position, digit) in engine.bulls().iter() {
                assert_eq!(secret.digit_at(position), digit, "{secret}");
            }
            assert!(engine.pool().iter().count() >= CODE_LENGTH);
            assert!(secret.digits().iter().all(|&d| engine.pool().contains(d)));

            if let TurnOutcome::Solved(found) = outcome {
                assert_eq!(found, secret);
                return engine;
            }
        }
        panic!("{secret}: not solved within 64 turns");
    }

    #[test]
    fn opening_guess_is_stable_until_feedback() {
        let engine = Engine::with_seed(42);
        let guess = engine.submit_guess();

        assert_eq!(engine.submit_guess(), guess);
        assert!(Guess::new(*guess.digits()).is_ok());
        assert_eq!(engine.phase(), Phase::Initial);
        assert_eq!(engine.turns(), 0);
        assert_eq!(engine.candidates_remaining(), 3024);
        assert_eq!(engine.last_inference(), None);
    }

    #[test]
    fn same_seed_same_session() {
        let secret = code("7395");
        let a = play(secret, 9);
        let b = play(secret, 9);
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn invalid_feedback_leaves_state_unchanged() {
        let mut engine = Engine::with_seed(1);
        let guess = engine.submit_guess();

        let err = engine.record_feedback(3, 2).unwrap_err();
        assert!(matches!(err, EngineError::InvalidFeedback(_)));
        let err = engine.record_feedback(5, 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidFeedback(_)));

        assert_eq!(engine.turns(), 0);
        assert_eq!(engine.submit_guess(), guess);
        assert_eq!(engine.phase(), Phase::Initial);
    }

    #[test]
    fn impossible_feedback_aborts_session() {
        let mut engine = Engine::with_seed(1);

        let err = engine.record_feedback(3, 1).unwrap_err();
        assert!(matches!(err, EngineError::Contradiction(_)));
        assert_eq!(engine.phase(), Phase::Aborted);
        assert!(engine.is_over());
        assert!(!engine.is_solved());

        assert_eq!(engine.record_feedback(1, 0), Err(EngineError::SessionOver));
    }

    #[test]
    fn zero_response_excludes_digits_and_draws_disjoint_guess() {
        // Secret 1234
        let mut engine = Engine::with_first_guess(code("5678"), 3);

        let outcome = engine.record_feedback(0, 0).unwrap();
        let TurnOutcome::Continue(next) = outcome else {
            panic!("expected another guess");
        };

        assert!(next.digits().iter().all(|d| ![5, 6, 7, 8].contains(d)));
        assert_eq!(engine.pool().iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 9]);
        assert_eq!(engine.phase(), Phase::Exploring);
        assert_eq!(engine.submit_guess(), next);
    }

    #[test]
    fn repeated_zero_response_exhausts_pool() {
        let mut engine = Engine::with_first_guess(code("1234"), 5);
        engine.record_feedback(0, 0).unwrap();

        // Four of the five remaining digits miss as well
        assert_eq!(
            engine.record_feedback(0, 0),
            Err(EngineError::PoolExhausted { remaining: 1 })
        );
        assert_eq!(engine.pool().len(), 1);
        assert_eq!(engine.phase(), Phase::Aborted);
        assert_eq!(engine.record_feedback(0, 1), Err(EngineError::SessionOver));
    }

    #[test]
    fn zero_response_cannot_drop_a_known_bull() {
        let mut engine = Engine::with_first_guess(code("5239"), 2);
        engine.record_feedback(2, 0).unwrap();
        engine.override_guess(code("1239")).unwrap();
        engine.record_feedback(3, 0).unwrap();
        assert_eq!(engine.bulls().to_string(), "1___");

        engine.override_guess(code("1456")).unwrap();
        let err = engine.record_feedback(0, 0).unwrap_err();
        assert!(
            matches!(&err, EngineError::Contradiction(why) if why.contains("known bull")),
            "{err}"
        );
        assert_eq!(engine.phase(), Phase::Aborted);
    }

    #[test]
    fn three_bulls_and_a_cow_leave_no_swap() {
        let mut engine = Engine::with_first_guess(code("5674"), 13);
        engine.record_feedback(0, 1).unwrap();
        engine.override_guess(code("1674")).unwrap();
        engine.record_feedback(1, 1).unwrap();
        engine.override_guess(code("1274")).unwrap();
        engine.record_feedback(2, 1).unwrap();
        assert_eq!(engine.bulls().to_string(), "12__");

        // 3 is the third bull; the last slot can only hold 4, and 1234 was just asked
        engine.override_guess(code("1234")).unwrap();
        assert_eq!(
            engine.record_feedback(3, 1),
            Err(EngineError::NoSwapAvailable { unbound: 1 })
        );
        assert_eq!(engine.phase(), Phase::Aborted);
    }

    #[test]
    fn single_change_to_solution() {
        // Secret 1234
        let mut engine = Engine::with_first_guess(code("1239"), 8);
        assert!(matches!(
            engine.record_feedback(3, 0),
            Ok(TurnOutcome::Continue(_))
        ));
        assert_eq!(engine.phase(), Phase::Exploring);

        engine.override_guess(code("1234")).unwrap();
        assert_eq!(
            engine.record_feedback(4, 0),
            Ok(TurnOutcome::Solved(code("1234")))
        );
        assert!(engine.is_solved());
        assert_eq!(
            engine.last_inference(),
            Some(Inference::Bull {
                position: 3,
                digit: 4
            })
        );
        assert_eq!(engine.record_feedback(4, 0), Err(EngineError::SessionOver));
        assert_eq!(
            engine.override_guess(code("5678")),
            Err(EngineError::SessionOver)
        );
    }

    #[test]
    fn plateau_switches_to_swapping_unbound_positions() {
        // Secret 1234
        let mut engine = Engine::with_first_guess(code("5267"), 21);
        engine.record_feedback(1, 0).unwrap();

        engine.override_guess(code("1267")).unwrap();
        engine.record_feedback(2, 0).unwrap();
        assert_eq!(
            engine.last_inference(),
            Some(Inference::Bull {
                position: 0,
                digit: 1
            })
        );

        engine.override_guess(code("1567")).unwrap();
        engine.record_feedback(1, 0).unwrap();
        assert_eq!(
            engine.last_inference(),
            Some(Inference::Bull {
                position: 1,
                digit: 2
            })
        );
        assert_eq!(engine.bulls().to_string(), "12__");

        engine.override_guess(code("1243")).unwrap();
        let outcome = engine.record_feedback(2, 2).unwrap();
        assert_eq!(engine.phase(), Phase::Plateau);
        assert_eq!(engine.pool().iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(outcome, TurnOutcome::Continue(code("1234")));
        assert_eq!(engine.submit_guess(), code("1234"));

        assert_eq!(
            engine.record_feedback(4, 0),
            Ok(TurnOutcome::Solved(code("1234")))
        );
    }

    #[test]
    fn all_cows_counts_as_plateau() {
        let secret = code("4321");
        let mut engine = Engine::with_first_guess(code("1234"), 17);

        let outcome = engine.record_feedback(0, 4).unwrap();
        assert_eq!(engine.phase(), Phase::Plateau);
        assert_eq!(engine.pool().iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        let TurnOutcome::Continue(next) = outcome else {
            panic!("expected another guess");
        };
        assert_eq!(next.differing_positions(&code("1234")).len(), 2);

        for _ in 0..64 {
            let guess = engine.submit_guess();
            if let TurnOutcome::Solved(found) =
                engine.record(Feedback::calculate(&guess, &secret)).unwrap()
            {
                assert_eq!(found, secret);
                return;
            }
        }
        panic!("4321 not solved from the plateau");
    }

    #[test]
    fn override_rejects_guesses_that_break_facts() {
        // Secret 1234
        let mut engine = Engine::with_first_guess(code("5267"), 4);
        engine.record_feedback(1, 0).unwrap();
        engine.override_guess(code("1267")).unwrap();
        engine.record_feedback(2, 0).unwrap();

        assert!(matches!(
            engine.override_guess(code("5267")),
            Err(EngineError::RejectedGuess {
                reason: "already asked",
                ..
            })
        ));
        assert!(matches!(
            engine.override_guess(code("3245")),
            Err(EngineError::RejectedGuess {
                reason: "moves a known bull",
                ..
            })
        ));
    }

    #[test]
    fn override_rejects_excluded_digits() {
        // Secret 1234
        let mut engine = Engine::with_first_guess(code("1253"), 6);
        engine.record_feedback(2, 1).unwrap();
        engine.override_guess(code("1259")).unwrap();
        engine.record_feedback(2, 0).unwrap();
        assert_eq!(
            engine.last_inference(),
            Some(Inference::Excluded { digit: 9 })
        );
        assert!(!engine.pool().contains(9));
        assert!(matches!(
            engine.override_guess(code("1239")),
            Err(EngineError::RejectedGuess {
                reason: "uses an excluded digit",
                ..
            })
        ));
    }

    #[test]
    fn every_secret_is_solved() {
        let secrets = all_secrets();
        let turns: Vec<usize> = secrets
            .par_iter()
            .enumerate()
            .map(|(i, &secret)| play(secret, i as u64).turns())
            .collect();

        assert_eq!(turns.len(), 3024);
        assert!(turns.iter().all(|&t| (1..=64).contains(&t)));
    }
}
