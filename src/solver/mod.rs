//! The candidate-elimination solving loop

mod constraints;
mod engine;

pub use constraints::Constraints;
pub use engine::{Engine, SolveOutcome, SolveStep};
