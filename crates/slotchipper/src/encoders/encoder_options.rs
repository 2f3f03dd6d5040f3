//! # Lexical Encoder Options
//!
//! Shapes for building a [`LexicalEncoder`](crate::encoders::LexicalEncoder).

use crate::{SCResult, SlotchipperError};

/// Default words per sentence row block.
pub const DEFAULT_MAX_WORDS: usize = 20;

/// Default ids per word row.
pub const DEFAULT_MAX_NGRAMS: usize = 20;

/// Default embedding width.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 300;

/// Options for configuring a [`LexicalEncoder`](crate::encoders::LexicalEncoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncoderOptions {
    /// Word rows per sentence.
    pub max_words: usize,

    /// Ids per word row.
    pub max_ngrams: usize,

    /// The embedding model width; carried for the embedding collaborator.
    pub embedding_dimensions: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            max_ngrams: DEFAULT_MAX_NGRAMS,
            embedding_dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}

impl EncoderOptions {
    /// Create options with the given buffer shape.
    pub fn new(
        max_words: usize,
        max_ngrams: usize,
    ) -> Self {
        Self {
            max_words,
            max_ngrams,
            ..Default::default()
        }
    }

    /// Get the configured words per sentence.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Set the configured words per sentence and return the options.
    pub fn with_max_words(
        mut self,
        max_words: usize,
    ) -> Self {
        self.max_words = max_words;
        self
    }

    /// Get the configured ids per word.
    pub fn max_ngrams(&self) -> usize {
        self.max_ngrams
    }

    /// Set the configured ids per word and return the options.
    pub fn with_max_ngrams(
        mut self,
        max_ngrams: usize,
    ) -> Self {
        self.max_ngrams = max_ngrams;
        self
    }

    /// Get the configured embedding width.
    pub fn embedding_dimensions(&self) -> usize {
        self.embedding_dimensions
    }

    /// Set the configured embedding width and return the options.
    pub fn with_embedding_dimensions(
        mut self,
        embedding_dimensions: usize,
    ) -> Self {
        self.embedding_dimensions = embedding_dimensions;
        self
    }

    /// The number of ids in one sentence block: ``max_words * max_ngrams``.
    pub fn sentence_len(&self) -> usize {
        self.max_words * self.max_ngrams
    }

    /// Reject zero-sized shapes.
    pub fn validate(&self) -> SCResult<()> {
        if self.max_words == 0 || self.max_ngrams == 0 {
            return Err(SlotchipperError::InvalidShape(format!(
                "max_words ({}) and max_ngrams ({}) must be > 0",
                self.max_words, self.max_ngrams
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let options = EncoderOptions::default()
            .with_max_words(4)
            .with_max_ngrams(3)
            .with_embedding_dimensions(8);

        assert_eq!(options.max_words(), 4);
        assert_eq!(options.max_ngrams(), 3);
        assert_eq!(options.embedding_dimensions(), 8);
        assert_eq!(options.sentence_len(), 12);
        assert!(options.validate().is_ok());

        assert!(EncoderOptions::new(0, 3).validate().is_err());
        assert!(EncoderOptions::new(3, 0).validate().is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let options: EncoderOptions = serde_json::from_str(r#"{"maxWords": 7}"#).unwrap();
        assert_eq!(options.max_words, 7);
        assert_eq!(options.max_ngrams, DEFAULT_MAX_NGRAMS);
        assert_eq!(options.embedding_dimensions, DEFAULT_EMBEDDING_DIMENSIONS);
    }
}
