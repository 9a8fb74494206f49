//! Boring-score ranking of candidate words

mod frequency;

pub use frequency::{LetterFrequencies, ScoreError, ScoredTable, ScoredWord};
