//! Wordle guess feedback
//!
//! Comparing a guess against the hidden target yields three signals:
//! - `in_word`: letters of the guess that occur somewhere in the target
//! - `not_in_word`: letters of the guess that occur nowhere in the target
//! - `in_place`: per-position exact matches
//!
//! The letter sets track presence, not count, so a letter repeated in the
//! guess is reported once. `in_place` is computed strictly positionally and
//! independently of the sets: a letter can be in place at one index and still
//! count toward `in_word` through another. This mirrors the household-Wordle
//! handling of duplicate letters and is kept as observed behavior.

use super::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Feedback for one guess against one target
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    correct: bool,
    in_word: FxHashSet<u8>,
    not_in_word: FxHashSet<u8>,
    in_place: Vec<Option<u8>>,
}

/// Error type for feedback evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    LengthMismatch { guess: usize, target: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, target } => write!(
                f,
                "Guess length {guess} does not match target length {target}"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Evaluate a guess against the target
    ///
    /// Pure function; the only failure mode is a length mismatch.
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the guess and target have
    /// different lengths.
    ///
    /// # Examples
    /// ```
    /// use wordle_boring::core::{Feedback, Word};
    ///
    /// let guess = Word::new("spare").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::of(&guess, &target).unwrap();
    ///
    /// assert!(!feedback.is_correct());
    /// assert!(feedback.in_word().contains(&b'a'));
    /// assert!(feedback.not_in_word().contains(&b's'));
    /// ```
    pub fn of(guess: &Word, target: &Word) -> Result<Self, FeedbackError> {
        if guess.len() != target.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: guess.len(),
                target: target.len(),
            });
        }

        let correct = guess == target;

        let mut in_word = FxHashSet::default();
        let mut not_in_word = FxHashSet::default();
        for &letter in guess.bytes() {
            if target.has_letter(letter) {
                in_word.insert(letter);
            } else {
                not_in_word.insert(letter);
            }
        }

        let in_place = guess
            .bytes()
            .iter()
            .zip(target.bytes())
            .map(|(&g, &t)| (g == t).then_some(g))
            .collect();

        Ok(Self {
            correct,
            in_word,
            not_in_word,
            in_place,
        })
    }

    /// True iff the guess equals the target exactly
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.correct
    }

    /// Guess letters that occur somewhere in the target
    #[inline]
    #[must_use]
    pub const fn in_word(&self) -> &FxHashSet<u8> {
        &self.in_word
    }

    /// Guess letters that occur nowhere in the target
    #[inline]
    #[must_use]
    pub const fn not_in_word(&self) -> &FxHashSet<u8> {
        &self.not_in_word
    }

    /// Per-position exact matches; `None` marks an unconstrained position
    #[inline]
    #[must_use]
    pub fn in_place(&self) -> &[Option<u8>] {
        &self.in_place
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn letters(set: &FxHashSet<u8>) -> Vec<u8> {
        let mut v: Vec<u8> = set.iter().copied().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn feedback_guess_equals_target() {
        let crane = word("crane");
        let feedback = Feedback::of(&crane, &crane).unwrap();

        assert!(feedback.is_correct());
        assert_eq!(letters(feedback.in_word()), b"acenr");
        assert!(feedback.not_in_word().is_empty());
        assert_eq!(
            feedback.in_place(),
            &[Some(b'c'), Some(b'r'), Some(b'a'), Some(b'n'), Some(b'e')]
        );
    }

    #[test]
    fn feedback_spare_against_crane() {
        let feedback = Feedback::of(&word("spare"), &word("crane")).unwrap();

        assert!(!feedback.is_correct());
        assert_eq!(letters(feedback.in_word()), b"aer");
        assert_eq!(letters(feedback.not_in_word()), b"ps");
        // Only positions 2 (a) and 4 (e) line up
        assert_eq!(
            feedback.in_place(),
            &[None, None, Some(b'a'), None, Some(b'e')]
        );
    }

    #[test]
    fn feedback_no_letters_shared() {
        let feedback = Feedback::of(&word("pious"), &word("crane")).unwrap();

        assert!(!feedback.is_correct());
        assert!(feedback.in_word().is_empty());
        assert_eq!(letters(feedback.not_in_word()), b"iopsu");
        assert_eq!(feedback.in_place(), &[None; 5]);
    }

    #[test]
    fn feedback_repeated_guess_letter_reported_once() {
        // Both E's of GEESE are in ERASE; set semantics collapse them
        let feedback = Feedback::of(&word("geese"), &word("erase")).unwrap();

        assert_eq!(letters(feedback.in_word()), b"es");
        assert_eq!(letters(feedback.not_in_word()), b"g");
    }

    #[test]
    fn feedback_letter_in_place_and_in_word() {
        // The second A of ALTAR matches positionally; the letter still shows
        // up in the present set because it occurs in the guess elsewhere too
        let feedback = Feedback::of(&word("altar"), &word("solar")).unwrap();

        assert!(feedback.in_word().contains(&b'a'));
        assert_eq!(
            feedback.in_place(),
            &[None, None, None, Some(b'a'), Some(b'r')]
        );
    }

    #[test]
    fn feedback_length_mismatch() {
        let result = Feedback::of(&word("crane"), &word("cranes"));
        assert_eq!(
            result,
            Err(FeedbackError::LengthMismatch {
                guess: 5,
                target: 6
            })
        );
    }

    #[test]
    fn feedback_sets_are_disjoint() {
        let feedback = Feedback::of(&word("spare"), &word("crane")).unwrap();
        assert!(feedback.in_word().is_disjoint(feedback.not_in_word()));
    }
}
