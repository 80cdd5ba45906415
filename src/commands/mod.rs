//! Command implementations

pub mod benchmark;
pub mod score;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, new_engine, replay_session, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_session, run_test_all};

/// Turn limit for automated sessions
pub const MAX_TURNS: usize = 64;
