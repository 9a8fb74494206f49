//! Wordle Boring Solver - CLI
//!
//! Runs the letter-frequency heuristic solver against a plain-text
//! dictionary, either for a single target word or across the whole list.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_boring::{
    commands::{run_stats, solve_word},
    core::Word,
    output::{print_solve_report, print_stats_report},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_boring",
    about = "Heuristic Wordle solver ranking guesses by letter-frequency boring scores",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// Dictionary file, one word per line
        dictionary: PathBuf,

        /// The hidden target word
        word: String,

        /// Show feedback tiles and letter frequencies
        #[arg(short, long)]
        verbose: bool,
    },

    /// Evaluate the solver against every word in the dictionary
    Stats {
        /// Dictionary file, one word per line
        dictionary: PathBuf,

        /// Word length to solve at
        #[arg(short = 'n', long, default_value = "5")]
        length: usize,

        /// Limit number of target words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            dictionary,
            word,
            verbose,
        } => run_solve_command(&dictionary, &word, verbose),
        Commands::Stats {
            dictionary,
            length,
            limit,
        } => run_stats_command(&dictionary, length, limit),
    }
}

fn run_solve_command(path: &Path, word: &str, verbose: bool) -> Result<()> {
    let dictionary = load_dictionary(path, word.len())?;

    // Exhaustion still exits 0; the report text tells the outcome apart
    let report = solve_word(word, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_report(&report, verbose);
    Ok(())
}

fn run_stats_command(path: &Path, length: usize, limit: Option<usize>) -> Result<()> {
    let dictionary = load_dictionary(path, length)?;

    let report = run_stats(&dictionary, limit).map_err(|e| anyhow::anyhow!(e))?;
    print_stats_report(&report);
    Ok(())
}

fn load_dictionary(path: &Path, length: usize) -> Result<Vec<Word>> {
    let dictionary = load_from_file(path, length)
        .with_context(|| format!("Failed to read dictionary {}", path.display()))?;

    if dictionary.is_empty() {
        bail!("No {length}-letter words found in {}", path.display());
    }

    Ok(dictionary)
}
