//! # Lexical Encoders
//!
//! Encoders turn batches of sentences into zero-padded
//! ``[batch, max_words, max_ngrams]`` id buffers for the embedding model.
//!
//! * [`SentenceEncoder`] - the encoder trait; batch methods are provided.
//! * [`LexicalEncoder`] - the dictionary-backed ``word -> bigrams -> characters`` encoder.
//! * [`IdBuffer`] - the row-major id buffer.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use slotchipper::{
//!     dictionary::LexicalDictionary,
//!     encoders::{EncoderOptions, LexicalEncoder, SentenceEncoder},
//!     language::Language,
//! };
//!
//! let dictionary = LexicalDictionary::<u32>::from_keys(["__", "cat", "do", "og"]).unwrap();
//! let encoder = LexicalEncoder::new(
//!     Arc::new(dictionary),
//!     Language::English.tokenizer(),
//!     EncoderOptions::new(2, 3),
//! )
//! .unwrap();
//!
//! let buffer = encoder.encode_words(&["Cat dog"]);
//! assert_eq!(buffer.sentence(0), &[1, 0, 0, 2, 3, 0]);
//! ```

mod encoder_options;
mod id_buffer;
mod lexical_encoder;
mod sentence_encoder;

#[doc(inline)]
pub use encoder_options::{
    DEFAULT_EMBEDDING_DIMENSIONS,
    DEFAULT_MAX_NGRAMS,
    DEFAULT_MAX_WORDS,
    EncoderOptions,
};
#[doc(inline)]
pub use id_buffer::IdBuffer;
#[doc(inline)]
pub use lexical_encoder::LexicalEncoder;
#[doc(inline)]
pub use sentence_encoder::SentenceEncoder;
