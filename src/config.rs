//! Search configuration.

use crate::error::{Result, SquaredleError};
use crate::MIN_WORD_LENGTH;

/// Parameters of a single solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    min_length: usize,
}

impl SearchConfig {
    /// Create a config, rejecting a minimum length of zero
    pub fn new(min_length: usize) -> Result<Self> {
        if min_length < 1 {
            return Err(SquaredleError::InvalidConfig { min_length });
        }
        Ok(Self { min_length })
    }

    /// Shortest word that will be reported
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_length: MIN_WORD_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_four() {
        assert_eq!(SearchConfig::default().min_length(), 4);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(
            SearchConfig::new(0),
            Err(SquaredleError::InvalidConfig { min_length: 0 })
        ));
        assert_eq!(SearchConfig::new(1).unwrap().min_length(), 1);
    }
}
