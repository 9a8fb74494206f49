//! Letter-frequency boring scores
//!
//! A word's boring score is the sum of the relative frequencies of its
//! distinct letters, where each letter's frequency is its share of all letter
//! occurrences across every position of every candidate word. Words covering
//! many common letters score high and make informative opening guesses; the
//! score is a cheap stand-in for expected information gain that needs no
//! outcome distribution.
//!
//! Frequencies are tallied once from the initial candidate set. Filtering
//! later rounds never rescores the survivors.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Relative letter frequencies over a candidate set
///
/// Maps each observed letter to its fraction of all letter occurrences.
/// Frequencies over the observed letters sum to 1.0 within floating
/// tolerance. Exposed for diagnostics; the elimination loop itself only
/// consumes the scored table.
#[derive(Debug, Clone)]
pub struct LetterFrequencies {
    freqs: FxHashMap<u8, f64>,
}

impl LetterFrequencies {
    fn tally(words: &[Word]) -> Self {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        let mut total = 0usize;

        for word in words {
            for &letter in word.bytes() {
                *counts.entry(letter).or_insert(0) += 1;
                total += 1;
            }
        }

        let freqs = counts
            .into_iter()
            .map(|(letter, count)| (letter, count as f64 / total as f64))
            .collect();

        Self { freqs }
    }

    /// Relative frequency of a letter; 0.0 for letters never observed
    #[inline]
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        self.freqs.get(&letter).copied().unwrap_or(0.0)
    }

    /// Number of distinct letters observed
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.freqs.len()
    }

    /// Observed letters with their frequencies, most frequent first
    ///
    /// Ties are broken alphabetically so the ranking is reproducible.
    #[must_use]
    pub fn ranking(&self) -> Vec<(u8, f64)> {
        let mut entries: Vec<(u8, f64)> = self.freqs.iter().map(|(&l, &f)| (l, f)).collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

/// A candidate word paired with its boring score
#[derive(Debug, Clone)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

/// Candidate words with their boring scores, in dictionary order
///
/// Row order preserves the input order and serves as the deterministic
/// tie-break when ranking equal scores. The table is a value: filtering
/// produces a fresh, smaller table and leaves the original untouched.
#[derive(Debug, Clone)]
pub struct ScoredTable {
    rows: Vec<ScoredWord>,
}

/// Error type for scoring invalid candidate sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    EmptyCandidates,
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidates => write!(f, "Candidate set is empty"),
            Self::LengthMismatch { expected, found } => write!(
                f,
                "Candidate words must share one length, got both {expected} and {found}"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

impl ScoredTable {
    /// Score a candidate set
    ///
    /// Tallies letter frequencies across all words, then scores each word as
    /// the sum of its distinct letters' frequencies. Duplicate words are
    /// scored independently. Pure; word order only affects row order, never
    /// the score a word receives.
    ///
    /// # Errors
    /// Returns `ScoreError::EmptyCandidates` for an empty slice and
    /// `ScoreError::LengthMismatch` if the words do not share one length.
    pub fn build(words: &[Word]) -> Result<(Self, LetterFrequencies), ScoreError> {
        let Some(first) = words.first() else {
            return Err(ScoreError::EmptyCandidates);
        };

        let expected = first.len();
        if let Some(odd) = words.iter().find(|w| w.len() != expected) {
            return Err(ScoreError::LengthMismatch {
                expected,
                found: odd.len(),
            });
        }

        let frequencies = LetterFrequencies::tally(words);

        let rows = words
            .iter()
            .map(|word| ScoredWord {
                score: word
                    .distinct_letters()
                    .map(|letter| frequencies.frequency(letter))
                    .sum(),
                word: word.clone(),
            })
            .collect();

        Ok((Self { rows }, frequencies))
    }

    /// Number of candidate rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no candidates remain
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in dictionary order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[ScoredWord] {
        &self.rows
    }

    /// The row `rank` positions below the top of the score ordering
    ///
    /// Rank 0 is the highest-scoring word. Equal scores keep dictionary
    /// order, so ranking is stable and runs are reproducible. A rank past
    /// the last row is clamped to the lowest-scoring word. Returns `None`
    /// only on an empty table.
    #[must_use]
    pub fn ranked(&self, rank: usize) -> Option<&ScoredWord> {
        if self.rows.is_empty() {
            return None;
        }

        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|&a, &b| {
            self.rows[b]
                .score
                .total_cmp(&self.rows[a].score)
                .then(a.cmp(&b))
        });

        let rank = rank.min(order.len() - 1);
        Some(&self.rows[order[rank]])
    }

    /// Keep the rows whose words satisfy the predicate
    ///
    /// Returns the surviving rows as a fresh table, in their original order
    /// and with their original scores, plus the number of rows dropped.
    #[must_use]
    pub fn filter<P>(&self, keep: P) -> (Self, usize)
    where
        P: Fn(&Word) -> bool,
    {
        let rows: Vec<ScoredWord> = self
            .rows
            .iter()
            .filter(|row| keep(&row.word))
            .cloned()
            .collect();
        let dropped = self.rows.len() - rows.len();

        (Self { rows }, dropped)
    }
}
