//! # Squaredle Solver
//!
//! Finds every dictionary word that can be traced through a Squaredle grid.
//!
//! Words are paths of 8-directionally adjacent, non-repeating cells. The
//! dictionary is held in a prefix trie so the depth-first search can abandon a
//! path as soon as its letters stop being the prefix of any word.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod grid;
pub mod solver;
pub mod trie;

pub use config::SearchConfig;
pub use dictionary::{filter_min_length, load_word_list, parse_word_list};
pub use error::{Result, SquaredleError};
pub use grid::Grid;
pub use solver::{solve, sorted_by_length, SearchStats, Solver, WordSet};
pub use trie::{Trie, TrieNode};

/// Default minimum length of a reported word
pub const MIN_WORD_LENGTH: usize = 4;

/// Character marking a cell that can't be used by any word
pub const EXCLUDED_CELL: char = ' ';

/// Separator between rows in the single-line grid format
pub const ROW_SEPARATOR: char = '-';
