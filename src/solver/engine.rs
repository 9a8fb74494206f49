//! Elimination-loop solver
//!
//! Each round guesses the highest-ranked surviving candidate, folds the
//! feedback into the letter constraints, and filters the survivors into a
//! fresh table. When a round drops nothing, a rank index steps down the
//! score ordering so the next round tries a different word instead of
//! repeating a guess already proven unhelpful; any round that does drop
//! candidates resets the index to the top.

use super::Constraints;
use crate::core::{Feedback, FeedbackError, Word};
use crate::scoring::{LetterFrequencies, ScoreError, ScoredTable};

/// One round of the solve log: pool size before the guess, and the guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStep {
    pub pool_size: usize,
    pub guess: Word,
}

/// Terminal result of one solve run
///
/// `solution` is `None` when the candidate set was exhausted without finding
/// the target. Exhaustion is a normal outcome, not an error: the log still
/// records every guess made.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub solution: Option<Word>,
    pub log: Vec<SolveStep>,
}

impl SolveOutcome {
    /// True when the target was found
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Number of guesses made
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.log.len()
    }
}

/// Heuristic Wordle solver
///
/// Scores the dictionary once at construction; each call to
/// [`Engine::solve`] replays the elimination loop against a fresh copy of
/// the scored table, so one engine can solve many targets.
///
/// # Examples
/// ```
/// use wordle_boring::core::Word;
/// use wordle_boring::solver::Engine;
///
/// let dictionary: Vec<Word> = ["train", "crane", "plane"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let engine = Engine::new(&dictionary).unwrap();
/// let outcome = engine.solve(&Word::new("crane").unwrap()).unwrap();
///
/// assert!(outcome.is_solved());
/// ```
#[derive(Debug)]
pub struct Engine {
    table: ScoredTable,
    frequencies: LetterFrequencies,
}

impl Engine {
    /// Score a dictionary and build a solver over it
    ///
    /// # Errors
    /// Returns `ScoreError` if the dictionary is empty or its words do not
    /// share one length.
    pub fn new(words: &[Word]) -> Result<Self, ScoreError> {
        let (table, frequencies) = ScoredTable::build(words)?;
        Ok(Self { table, frequencies })
    }

    /// Letter frequencies of the initial dictionary, for diagnostics
    #[inline]
    #[must_use]
    pub const fn frequencies(&self) -> &LetterFrequencies {
        &self.frequencies
    }

    /// The scored table built at construction
    #[inline]
    #[must_use]
    pub const fn table(&self) -> &ScoredTable {
        &self.table
    }

    /// Run the elimination loop against a target word
    ///
    /// Terminates with a solution when a guess equals the target, or with
    /// `solution: None` once the candidate pool empties. The pool loses at
    /// least the guessed word every round, so the loop finishes within
    /// `dictionary size` rounds either way.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the target's length does not match the
    /// dictionary's word length.
    pub fn solve(&self, target: &Word) -> Result<SolveOutcome, FeedbackError> {
        let mut table = self.table.clone();
        let mut constraints = Constraints::new();
        let mut last_idx = 0usize;
        let mut log = Vec::new();

        while let Some(pick) = table.ranked(last_idx) {
            let guess = pick.word.clone();
            log.push(SolveStep {
                pool_size: table.len(),
                guess: guess.clone(),
            });

            let feedback = Feedback::of(&guess, target)?;
            if feedback.is_correct() {
                return Ok(SolveOutcome {
                    solution: Some(guess),
                    log,
                });
            }

            constraints.absorb(&feedback);
            let (survivors, dropped) =
                table.filter(|word| constraints.permits(word) && *word != guess);

            if dropped == 0 {
                last_idx += 1;
            } else {
                last_idx = 0;
            }
            table = survivors;
        }

        Ok(SolveOutcome {
            solution: None,
            log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn solves_target_in_dictionary() {
        let dictionary = words(&["train", "crane", "plane", "slate", "spade"]);
        let engine = Engine::new(&dictionary).unwrap();

        let outcome = engine.solve(&word("crane")).unwrap();

        assert!(outcome.is_solved());
        assert_eq!(outcome.solution, Some(word("crane")));
        assert_eq!(outcome.log.last().unwrap().guess, word("crane"));
        assert!(outcome.steps() <= dictionary.len());
    }

    #[test]
    fn first_guess_is_highest_boring_score() {
        // plane covers p, l, a, n, e; with a=5/25, e=4/25, n=3/25, p=l=2/25
        // it outscores every other word in this set
        let dictionary = words(&["train", "crane", "plane", "slate", "spade"]);
        let engine = Engine::new(&dictionary).unwrap();

        let outcome = engine.solve(&word("crane")).unwrap();

        assert_eq!(outcome.log[0].guess, word("plane"));
        assert_eq!(outcome.log[0].pool_size, 5);
    }

    #[test]
    fn reference_run_against_crane() {
        // plane's feedback pins a, n, e positionally and excludes p and l,
        // leaving crane alone in the pool
        let dictionary = words(&["train", "crane", "plane", "slate", "spade"]);
        let engine = Engine::new(&dictionary).unwrap();

        let outcome = engine.solve(&word("crane")).unwrap();

        let trace: Vec<(usize, &str)> = outcome
            .log
            .iter()
            .map(|step| (step.pool_size, step.guess.text()))
            .collect();
        assert_eq!(trace, vec![(5, "plane"), (1, "crane")]);
    }

    #[test]
    fn pool_shrinks_every_round() {
        // The guess itself always leaves the pool, so sizes strictly decrease
        let dictionary = words(&[
            "train", "crane", "plane", "slate", "spade", "brick", "mound", "fight",
        ]);
        let engine = Engine::new(&dictionary).unwrap();

        let outcome = engine.solve(&word("mound")).unwrap();

        for pair in outcome.log.windows(2) {
            assert!(pair[1].pool_size < pair[0].pool_size);
        }
    }

    #[test]
    fn exhausts_when_target_absent() {
        let dictionary = words(&["train", "crane", "plane", "slate", "spade"]);
        let engine = Engine::new(&dictionary).unwrap();

        // Valid length, but not in the dictionary
        let outcome = engine.solve(&word("mound")).unwrap();

        assert!(!outcome.is_solved());
        assert!(outcome.solution.is_none());
        assert!(!outcome.log.is_empty());
        assert!(outcome.steps() <= dictionary.len());
    }

    #[test]
    fn terminates_within_dictionary_size() {
        let dictionary = words(&["aa", "ab", "ba", "bb", "ca", "ac"]);
        let engine = Engine::new(&dictionary).unwrap();

        for target in &dictionary {
            let outcome = engine.solve(target).unwrap();
            assert!(outcome.is_solved(), "failed to solve {target}");
            assert!(outcome.steps() <= dictionary.len());
        }
    }

    #[test]
    fn target_length_mismatch_is_an_error() {
        let dictionary = words(&["train", "crane"]);
        let engine = Engine::new(&dictionary).unwrap();

        let result = engine.solve(&word("ox"));
        assert_eq!(
            result.unwrap_err(),
            FeedbackError::LengthMismatch {
                guess: 5,
                target: 2
            }
        );
    }

    #[test]
    fn engine_is_reusable_across_targets() {
        let dictionary = words(&["train", "crane", "plane", "slate", "spade"]);
        let engine = Engine::new(&dictionary).unwrap();

        for target in &dictionary {
            let outcome = engine.solve(target).unwrap();
            assert!(outcome.is_solved(), "failed to solve {target}");
            assert_eq!(outcome.solution.as_ref(), Some(target));
        }
    }

    #[test]
    fn single_word_dictionary_solves_in_one_step() {
        let dictionary = words(&["crane"]);
        let engine = Engine::new(&dictionary).unwrap();

        let outcome = engine.solve(&word("crane")).unwrap();

        assert!(outcome.is_solved());
        assert_eq!(outcome.steps(), 1);
    }

    #[test]
    fn empty_dictionary_is_a_score_error() {
        assert_eq!(Engine::new(&[]).unwrap_err(), ScoreError::EmptyCandidates);
    }
}
