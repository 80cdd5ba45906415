//! Next-guess moves
//!
//! A move turns the current guess into the next one: either a digit
//! substitution at one unbound position or a swap of two unbound positions.
//! Moves that would repeat an asked guess are never proposed.

use super::bulls::BullsMap;
use super::pool::DigitPool;
use super::ranking::max_partition;
use crate::core::Guess;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// A change applied to the current guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Put `digit` at `position`
    Substitute { position: usize, digit: u8 },
    /// Exchange the digits at two positions
    Swap { first: usize, second: usize },
}

impl Move {
    /// Apply the move, or `None` if it would repeat a digit
    #[must_use]
    pub fn apply(self, guess: &Guess) -> Option<Guess> {
        match self {
            Self::Substitute { position, digit } => guess.with_digit(position, digit),
            Self::Swap { first, second } => Some(guess.swapped(first, second)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substitute { position, digit } => {
                write!(f, "put {digit} at position {}", position + 1)
            }
            Self::Swap { first, second } => {
                write!(f, "swap positions {} and {}", first + 1, second + 1)
            }
        }
    }
}

/// Digit substitutions available from `guess`
///
/// If the guess holds a digit already excluded from the pool, only that
/// position may change; otherwise any unbound position may. Replacement
/// digits come from the pool and must not already be in the guess.
#[must_use]
pub fn substitutions(guess: &Guess, pool: &DigitPool, bulls: &BullsMap) -> Vec<Move> {
    let stale: Vec<usize> = guess
        .digits()
        .iter()
        .enumerate()
        .filter(|&(_, &d)| !pool.contains(d))
        .map(|(i, _)| i)
        .collect();

    let positions = if stale.is_empty() {
        bulls.unbound_positions()
    } else {
        stale
    };

    positions
        .into_iter()
        .flat_map(|position| {
            pool.iter()
                .filter(|&d| !guess.contains(d))
                .map(move |digit| Move::Substitute { position, digit })
        })
        .collect()
}

/// Swaps of two unbound positions
#[must_use]
pub fn swaps(bulls: &BullsMap) -> Vec<Move> {
    let unbound = bulls.unbound_positions();
    let mut moves = Vec::new();

    for (i, &first) in unbound.iter().enumerate() {
        for &second in &unbound[i + 1..] {
            moves.push(Move::Swap { first, second });
        }
    }

    moves
}

/// Pick the most informative fresh move
///
/// Moves leading to an already asked guess are dropped. The rest are ranked
/// by the worst-case number of consistent candidates left after asking
/// (lower is better), preferring guesses that could themselves be the
/// secret; remaining ties are broken at random.
///
/// `candidates` must be sorted.
pub fn select_move<R: Rng + ?Sized>(
    guess: &Guess,
    moves: &[Move],
    candidates: &[Guess],
    asked: &FxHashSet<Guess>,
    rng: &mut R,
) -> Option<(Move, Guess)> {
    let ranked: Vec<((usize, bool), Move, Guess)> = moves
        .iter()
        .filter_map(|&mv| mv.apply(guess).map(|next| (mv, next)))
        .filter(|(_, next)| !asked.contains(next))
        .map(|(mv, next)| {
            let worst = max_partition(&next, candidates);
            let inconsistent = candidates.binary_search(&next).is_err();
            ((worst, inconsistent), mv, next)
        })
        .collect();

    let best = ranked.iter().map(|(rank, _, _)| *rank).min()?;
    let tied: Vec<(Move, Guess)> = ranked
        .into_iter()
        .filter(|(rank, _, _)| *rank == best)
        .map(|(_, mv, next)| (mv, next))
        .collect();

    tied.choose(rng).copied()
}
