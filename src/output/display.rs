//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles};
use crate::commands::{SolveReport, StatsReport};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if report.is_solved() {
        println!(
            "{}",
            format!("Solved the Wordle in {} steps!", report.steps.len())
                .green()
                .bold()
        );
    } else {
        println!("{}", "Failed to solve the Wordle.".red().bold());
    }

    for (i, step) in report.steps.iter().enumerate() {
        if verbose {
            println!(
                "   Guess {}: {} {} -- {} words in dictionary.",
                i + 1,
                step.word,
                feedback_tiles(&step.word, &step.feedback),
                step.pool_size
            );
        } else {
            println!(
                "   Guess {}: {} -- {} words in dictionary.",
                i + 1,
                step.word,
                step.pool_size
            );
        }
    }

    if verbose {
        print_letter_ranking(report);
    }
}

/// Show the most common dictionary letters driving the boring scores
fn print_letter_ranking(report: &SolveReport) {
    println!("\n{}", "Letter frequencies (top 10):".cyan().bold());

    let top = report.letter_ranking.iter().take(10);
    let max_freq = report
        .letter_ranking
        .first()
        .map_or(0.0, |(_, freq)| *freq);

    for (letter, freq) in top {
        let bar = create_progress_bar(*freq, max_freq, 20);
        println!("   {letter}: {} {:.3}", bar.green(), freq);
    }
}

/// Print the result of a dictionary-wide evaluation
pub fn print_stats_report(report: &StatsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY EVALUATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let solve_rate = (report.solved as f64 / report.total_words as f64) * 100.0;

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:   {}", report.total_words);
    println!(
        "   Solved:         {} ({})",
        report.solved,
        format!("{solve_rate:.1}%").bright_yellow()
    );
    println!(
        "   Average steps:  {}",
        format!("{:.2}", report.average_steps).bright_yellow().bold()
    );
    println!(
        "   Best case:      {}",
        format!("{}", report.min_steps).green()
    );
    println!(
        "   Worst case:     {}",
        format!("{}", report.max_steps).yellow()
    );
    println!("   Time taken:     {:.2}s", report.duration.as_secs_f64());

    println!("\n{}", "Step distribution:".bright_cyan().bold());
    for steps in report.min_steps..=report.max_steps {
        if let Some(&count) = report.distribution.get(&steps) {
            let pct = (count as f64 / report.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {steps:3}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !report.worst_words.is_empty() {
        println!("\n{}", "Slowest solves:".bright_cyan().bold());
        for (word, steps) in &report.worst_words {
            println!("   {word} -- {steps} steps");
        }
    }
}
