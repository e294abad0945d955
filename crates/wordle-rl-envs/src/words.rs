//! Word-list loading.
//!
//! Plain-text format: one word per line, surrounding whitespace trimmed,
//! letters upper-cased, blank lines skipped. An optional limit truncates the
//! list to its first K entries for the smaller variants. Word-length
//! validation happens at environment construction, not here.

use std::fs;
use std::path::Path;

use log::debug;
use wordle_rl::Result;

/// Parse a word list from in-memory text
pub fn parse_words(data: &str, limit: Option<usize>) -> Vec<String> {
    let words = data
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| !word.is_empty());
    match limit {
        Some(k) => words.take(k).collect(),
        None => words.collect(),
    }
}

/// Load a word list from a file
pub fn load_words<P: AsRef<Path>>(path: P, limit: Option<usize>) -> Result<Vec<String>> {
    let data = fs::read_to_string(path.as_ref())?;
    let words = parse_words(&data, limit);
    debug!("loaded {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}
