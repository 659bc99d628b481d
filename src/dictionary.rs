//! Loading and normalizing word lists.
//!
//! Two layouts are accepted: one word per line, and a quoted comma-separated
//! list such as `['aa', 'aah', 'aahed']`. Words are lowercased, and anything
//! that isn't made of `a`-`z` after stripping quotes is dropped.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Characters stripped from both ends of every token
const TOKEN_TRIM: [char; 4] = ['\'', '"', '[', ']'];

/// Split a word list into normalized words, in input order
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(|token| token.trim_matches(TOKEN_TRIM).to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()))
        .collect()
}

/// Read and parse a word list file
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = parse_word_list(&text);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Drop words shorter than `min_length`
pub fn filter_min_length(words: Vec<String>, min_length: usize) -> Vec<String> {
    words
        .into_iter()
        .filter(|word| word.chars().count() >= min_length)
        .collect()
}
