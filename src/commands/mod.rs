//! Command implementations

pub mod solve;
pub mod stats;

pub use solve::{GuessStep, SolveReport, solve_word};
pub use stats::{StatsReport, run_stats};
