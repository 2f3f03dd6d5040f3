//! # Error Types

/// Errors from slotchipper operations.
#[derive(Debug, thiserror::Error)]
pub enum SlotchipperError {
    /// The language code matches no known tokenizer.
    #[error("unsupported language: {code:?} (supported: \"en\", \"es\")")]
    UnsupportedLanguage {
        /// The rejected language code.
        code: String,
    },

    /// Dictionary size exceeds the capacity of the target id type.
    #[error("dictionary size ({size}) exceeds id type capacity")]
    IdOverflow {
        /// The dictionary size that exceeded the capacity.
        size: usize,
    },

    /// Dictionary data is inconsistent.
    #[error("dictionary conflict: {0}")]
    DictionaryConflict(String),

    /// A buffer shape or batch size is unusable.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Parallel input lists disagree in length.
    #[error("mismatched lengths: {name} has {actual} entries, expected {expected}")]
    MismatchedLengths {
        /// The offending list.
        name: &'static str,
        /// The expected length.
        expected: usize,
        /// The actual length.
        actual: usize,
    },

    /// A label list is empty or otherwise unusable.
    #[error("invalid labels: {0}")]
    InvalidLabels(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Parse error (dictionary lines, floats, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for slotchipper operations.
pub type SCResult<T> = core::result::Result<T, SlotchipperError>;
