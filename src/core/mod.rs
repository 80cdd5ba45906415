//! Core domain types for Bulls and Cows
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
pub(crate) mod guess;

pub use feedback::{Feedback, FeedbackError};
pub use guess::{CODE_LENGTH, Guess, GuessError, MAX_DIGIT, MIN_DIGIT};
