//! # Language Tokenizers
//!
//! Each supported language provides a [`WordTokenizer`]: a sanitizer, a
//! word/separator splitter, a bigram splitter, and a joiner.
//!
//! The closed set of variants is [`LanguageTokenizer`], selected once from a
//! [`Language`] code when a pipeline is built.
//!
//! ## Example
//!
//! ```rust
//! use slotchipper::language::{Language, WordTokenizer};
//!
//! let tokenizer = Language::from_code("EN").unwrap().tokenizer();
//! assert_eq!(
//!     tokenizer.split_to_words("  Hello, World "),
//!     vec!["hello", ",", "world"],
//! );
//! assert_eq!(tokenizer.split_word_to_bigrams("cat"), vec!["ca", "at"]);
//! ```

mod english;
mod language_code;
mod spanish;
mod word_tokenizer;

#[doc(inline)]
pub use english::EnglishTokenizer;
#[doc(inline)]
pub use language_code::{Language, LanguageTokenizer};
#[doc(inline)]
pub use spanish::SpanishTokenizer;
#[doc(inline)]
pub use word_tokenizer::{UNKNOWN_NGRAM_KEY, WORD_SEPARATORS, WordTokenizer, is_word_separator};
