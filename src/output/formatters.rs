//! Formatting utilities for terminal output

use crate::core::{Feedback, Word};

/// Render feedback as an emoji tile string
///
/// Positional matches are green; letters present elsewhere in the target
/// are yellow; absent letters are gray. Display-only: the solver's filter
/// consumes the raw feedback signals, never this rendering.
#[must_use]
pub fn feedback_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .bytes()
        .iter()
        .enumerate()
        .map(|(i, letter)| {
            if feedback.in_place()[i].is_some() {
                '🟩'
            } else if feedback.in_word().contains(letter) {
                '🟨'
            } else {
                '⬜'
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
