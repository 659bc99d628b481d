//! Error types for building and running a solve.

/// Errors raised while building a solver or loading its inputs.
///
/// Everything except [`SquaredleError::SearchBudgetExceeded`] is detected
/// before any search runs.
#[derive(Debug, thiserror::Error)]
pub enum SquaredleError {
    /// Minimum word length below 1
    #[error("invalid config: min length must be at least 1, got {min_length}")]
    InvalidConfig { min_length: usize },
    /// Ragged rows, unknown characters or an empty grid
    #[error("malformed grid: {0}")]
    MalformedGrid(String),
    /// A dictionary with no words; every search would be vacuous
    #[error("word list contains no words")]
    EmptyWordList,
    /// A bounded search visited more cells than allowed
    #[error("search exceeded its budget of {limit} visits")]
    SearchBudgetExceeded { limit: u64 },
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SquaredleError>;
