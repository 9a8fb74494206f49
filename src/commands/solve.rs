//! Word solving command
//!
//! Runs the elimination loop for one target word and assembles a report
//! for the terminal.

use crate::core::{Feedback, Word};
use crate::solver::Engine;

/// Result of solving one target word
pub struct SolveReport {
    pub target: String,
    pub solution: Option<String>,
    pub steps: Vec<GuessStep>,
    /// Dictionary letters with their frequencies, most frequent first
    pub letter_ranking: Vec<(char, f64)>,
}

/// A single guess in the solution path
pub struct GuessStep {
    pub word: Word,
    pub pool_size: usize,
    pub feedback: Feedback,
}

impl SolveReport {
    /// True when the target was found
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Solve a specific word against a dictionary
///
/// The dictionary must already be filtered to the target's word length.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (empty or not ASCII letters)
/// - The dictionary is empty or holds words of mixed lengths
/// - The dictionary's word length does not match the target's
pub fn solve_word(target: &str, dictionary: &[Word]) -> Result<SolveReport, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;

    let engine = Engine::new(dictionary).map_err(|e| format!("Cannot score dictionary: {e}"))?;
    let outcome = engine.solve(&target).map_err(|e| e.to_string())?;

    let mut steps = Vec::with_capacity(outcome.log.len());
    for entry in &outcome.log {
        // Replay the feedback for display; the solve itself already finished
        let feedback = Feedback::of(&entry.guess, &target).map_err(|e| e.to_string())?;
        steps.push(GuessStep {
            word: entry.guess.clone(),
            pool_size: entry.pool_size,
            feedback,
        });
    }

    let letter_ranking = engine
        .frequencies()
        .ranking()
        .into_iter()
        .map(|(letter, freq)| (char::from(letter), freq))
        .collect();

    Ok(SolveReport {
        target: target.text().to_string(),
        solution: outcome.solution.map(|w| w.text().to_string()),
        steps,
        letter_ranking,
    })
}
