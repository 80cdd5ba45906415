//! Bulls and Cows Solver
//!
//! An adaptive deduction engine for Bulls and Cows: it reads each answer against
//! the previous turn, tracks proven bulls and a pool of possible digits, and
//! changes one thing at a time until the secret is pinned down.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bulls_cows::core::{Feedback, Guess};
//! use bulls_cows::solver::{Engine, TurnOutcome};
//!
//! let secret: Guess = "3285".parse().unwrap();
//! let mut engine = Engine::with_seed(42);
//!
//! loop {
//!     let guess = engine.submit_guess();
//!     let feedback = Feedback::calculate(&guess, &secret);
//!     if let TurnOutcome::Solved(found) = engine.record(feedback).unwrap() {
//!         println!("Solved {found} in {} turns", engine.turns());
//!         break;
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Deduction engine
pub mod solver;

// Secret universe and secret files
pub mod secrets;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
