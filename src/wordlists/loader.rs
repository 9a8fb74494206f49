//! Word list loading utilities
//!
//! Loads plain-text dictionaries, one word per line, filtered to the word
//! length of the current run.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of one length from a file
///
/// Returns every valid word of the requested length, skipping blank lines
/// and any entries that fail validation or have a different length.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_boring::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_of_length(content.lines(), length))
}

/// Filter lines down to valid words of one length
///
/// Lines are trimmed and lowercased; anything that is not a clean ASCII
/// word of the requested length is dropped.
#[must_use]
pub fn words_of_length<'a, I>(lines: I, length: usize) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            Word::new(line.trim())
                .ok()
                .filter(|word| word.len() == length)
        })
        .collect()
}
