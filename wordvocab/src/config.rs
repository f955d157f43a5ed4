//! Configuration for the word-level tokenizing pipeline.
use crate::classify::Abbreviations;
use crate::error::InvalidThresholdSnafu;
use crate::Result;

/// The minimum number of times a token must occur in a document to be kept as a known token.
pub const DEFAULT_MIN_FREQUENCY: usize = 2;

/// Settings which control how documents are tokenized and thresholded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizeConfig {
    /// Tokens that occur fewer times than this in a document are replaced by unknown tokens.
    ///
    /// Must be at least 1.
    pub min_frequency: usize,

    /// Fragments which keep their trailing punctuation
    pub abbreviations: Abbreviations,
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            abbreviations: Abbreviations::default(),
        }
    }
}

impl TokenizeConfig {
    pub fn with_min_frequency(self, min_frequency: usize) -> Self {
        Self {
            min_frequency,
            ..self
        }
    }

    pub fn with_abbreviations(self, abbreviations: Abbreviations) -> Self {
        Self {
            abbreviations,
            ..self
        }
    }

    /// Check the configuration up front, rather than waiting for the first document to fail.
    pub fn validate(&self) -> Result<()> {
        if self.min_frequency == 0 {
            return InvalidThresholdSnafu {
                min_frequency: self.min_frequency,
            }
            .fail();
        }

        Ok(())
    }
}
