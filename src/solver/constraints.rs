//! Letter constraints accumulated from guess feedback
//!
//! Included and excluded letters accumulate as set unions across rounds; an
//! excluded letter stays excluded for the rest of the solve. Positional
//! constraints are NOT accumulated: each round replaces them with the latest
//! feedback's `in_place` row. Both behaviors match the reference solver and
//! are load-bearing for its guess sequences.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashSet;

/// Accumulated filter constraints for one solve run
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    included: FxHashSet<u8>,
    excluded: FxHashSet<u8>,
    in_place: Vec<Option<u8>>,
}

impl Constraints {
    /// Start with no constraints; everything is permitted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round of feedback into the constraints
    ///
    /// `in_word` joins the included set, `not_in_word` joins the excluded
    /// set, and the positional row is replaced wholesale.
    pub fn absorb(&mut self, feedback: &Feedback) {
        self.included.extend(feedback.in_word());
        self.excluded.extend(feedback.not_in_word());
        self.in_place = feedback.in_place().to_vec();
    }

    /// Check a candidate against every active constraint
    ///
    /// A word is permitted when it contains every included letter, contains
    /// no excluded letter, and matches each constrained position.
    #[must_use]
    pub fn permits(&self, word: &Word) -> bool {
        if !self.included.iter().all(|&letter| word.has_letter(letter)) {
            return false;
        }

        if self.excluded.iter().any(|&letter| word.has_letter(letter)) {
            return false;
        }

        self.in_place
            .iter()
            .enumerate()
            .all(|(i, slot)| slot.is_none_or(|letter| word.letter_at(i) == letter))
    }

    /// Letters every candidate must contain
    #[must_use]
    pub const fn included(&self) -> &FxHashSet<u8> {
        &self.included
    }

    /// Letters no candidate may contain
    #[must_use]
    pub const fn excluded(&self) -> &FxHashSet<u8> {
        &self.excluded
    }
}
