//! Wordle Boring Solver
//!
//! A heuristic Wordle solver. Candidate words are ranked by a "boring score"
//! (the sum of the relative frequencies of their distinct letters) and an
//! elimination loop prunes the candidate pool with per-letter feedback until
//! the target is found or the pool runs dry.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_boring::core::Word;
//! use wordle_boring::solver::Engine;
//!
//! let dictionary: Vec<Word> = ["train", "crane", "plane", "slate", "spade"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let engine = Engine::new(&dictionary).unwrap();
//! let outcome = engine.solve(&Word::new("crane").unwrap()).unwrap();
//!
//! assert!(outcome.is_solved());
//! println!("Solved in {} steps", outcome.steps());
//! ```

// Core domain types
pub mod core;

// Boring-score ranking
pub mod scoring;

// Elimination loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
