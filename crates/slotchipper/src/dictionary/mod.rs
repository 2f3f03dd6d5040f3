//! # Lexical Dictionary
//!
//! The dictionary maps whole words, bigrams, and single characters to the
//! ids consumed by the embedding model.
//!
//! * [`LexicalDictionary`] - the immutable ``{ String -> T }`` table.
//! * [`split_pretrained_entries`] - build one from ``(key, vector)`` pairs.
//! * [`filter_pretrained_entries`] - reduce a full listing to characters and bigrams.
//! * [`io`] - fastText and key list readers / writers.

pub mod dictionary_filter;
pub mod io;
pub mod lexical_dictionary;
pub mod pretrained;

#[doc(inline)]
pub use dictionary_filter::filter_pretrained_entries;
#[doc(inline)]
pub use lexical_dictionary::LexicalDictionary;
#[doc(inline)]
pub use pretrained::{PretrainedEntry, PretrainedVectors, split_pretrained_entries};
