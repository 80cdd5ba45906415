//! Interactive terminal UI
//!
//! The engine proposes guesses; the player types bulls and cows.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};
