//! Bulls and Cows deduction engine
//!
//! The engine keeps a digit pool and a map of proven bulls, reads each turn
//! against the previous one, and proposes the next guess.

mod bulls;
mod deduction;
mod engine;
mod error;
pub mod moves;
mod pool;
pub mod ranking;

pub use bulls::{BindConflict, BullsMap};
pub use deduction::{Change, Inference, NoInference, Turn, deduce, single_change};
pub use engine::{Engine, Phase, TurnOutcome};
pub use error::EngineError;
pub use pool::{DigitPool, initial_guess};
