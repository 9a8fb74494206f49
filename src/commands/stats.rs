//! Dictionary-wide evaluation
//!
//! Solves every dictionary word as a target and aggregates the step counts,
//! giving a feel for how the boring-score heuristic behaves on a word list.

use crate::core::Word;
use crate::solver::Engine;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How many of the slowest solves to keep for the report
const WORST_WORDS: usize = 5;

/// Aggregated results from solving every dictionary word
pub struct StatsReport {
    pub total_words: usize,
    pub solved: usize,
    pub average_steps: f64,
    pub min_steps: usize,
    pub max_steps: usize,
    pub distribution: HashMap<usize, usize>,
    pub worst_words: Vec<(String, usize)>,
    pub duration: Duration,
}

/// Solve each dictionary word in turn and aggregate the outcomes
///
/// An optional `limit` caps how many targets are attempted, in dictionary
/// order. Every target is drawn from the dictionary itself, so each run
/// terminates solved; steps are counted from the solve log.
///
/// # Errors
///
/// Returns an error if the dictionary is empty or holds words of mixed
/// lengths.
pub fn run_stats(dictionary: &[Word], limit: Option<usize>) -> Result<StatsReport, String> {
    let engine = Engine::new(dictionary).map_err(|e| format!("Cannot score dictionary: {e}"))?;

    let target_count = limit
        .unwrap_or(dictionary.len())
        .min(dictionary.len());
    let targets = &dictionary[..target_count];
    if targets.is_empty() {
        return Err("No target words to test".to_string());
    }

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0usize;
    let mut total_steps = 0usize;
    let mut min_steps = usize::MAX;
    let mut max_steps = 0usize;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut slowest: Vec<(String, usize)> = Vec::new();

    for target in targets {
        let outcome = engine.solve(target).map_err(|e| e.to_string())?;
        let steps = outcome.steps();

        if outcome.is_solved() {
            solved += 1;
        }
        total_steps += steps;
        min_steps = min_steps.min(steps);
        max_steps = max_steps.max(steps);
        *distribution.entry(steps).or_insert(0) += 1;

        slowest.push((target.text().to_string(), steps));
        slowest.sort_by(|a, b| b.1.cmp(&a.1));
        slowest.truncate(WORST_WORDS);

        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(StatsReport {
        total_words,
        solved,
        average_steps: total_steps as f64 / total_words as f64,
        min_steps,
        max_steps,
        distribution,
        worst_words: slowest,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<Word> {
        ["train", "crane", "plane", "slate", "spade"]
            .iter()
            .map(|t| Word::new(*t).unwrap())
            .collect()
    }

    #[test]
    fn stats_solves_every_dictionary_word() {
        let report = run_stats(&dictionary(), None).unwrap();

        assert_eq!(report.total_words, 5);
        assert_eq!(report.solved, 5);
        assert!(report.min_steps >= 1);
        assert!(report.max_steps <= 5);
    }

    #[test]
    fn stats_distribution_sums_to_total() {
        let report = run_stats(&dictionary(), None).unwrap();

        let sum: usize = report.distribution.values().sum();
        assert_eq!(sum, report.total_words);
    }

    #[test]
    fn stats_average_between_min_and_max() {
        let report = run_stats(&dictionary(), None).unwrap();

        assert!(report.average_steps >= report.min_steps as f64);
        assert!(report.average_steps <= report.max_steps as f64);
    }

    #[test]
    fn stats_respects_limit() {
        let report = run_stats(&dictionary(), Some(2)).unwrap();

        assert_eq!(report.total_words, 2);
        assert_eq!(report.solved, 2);
    }

    #[test]
    fn stats_limit_larger_than_dictionary_is_clamped() {
        let report = run_stats(&dictionary(), Some(50)).unwrap();
        assert_eq!(report.total_words, 5);
    }

    #[test]
    fn stats_tracks_worst_words() {
        let report = run_stats(&dictionary(), None).unwrap();

        assert!(!report.worst_words.is_empty());
        assert!(report.worst_words.len() <= WORST_WORDS);
        assert_eq!(report.worst_words[0].1, report.max_steps);
    }

    #[test]
    fn stats_empty_dictionary_is_an_error() {
        assert!(run_stats(&[], None).is_err());
    }

    #[test]
    fn stats_limit_zero_is_an_error() {
        assert!(run_stats(&dictionary(), Some(0)).is_err());
    }
}
