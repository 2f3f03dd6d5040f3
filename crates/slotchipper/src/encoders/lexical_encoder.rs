//! # Lexical Encoder
//!
//! Encodes words with a ``word -> bigrams -> characters`` fallback chain.

use std::sync::Arc;

use crate::{
    SCResult,
    dictionary::LexicalDictionary,
    encoders::{EncoderOptions, SentenceEncoder},
    language::{LanguageTokenizer, WordTokenizer},
    types::IdType,
};

/// Dictionary-backed [`SentenceEncoder`].
///
/// Holds a shared read-only [`LexicalDictionary`] and a language tokenizer
/// selected once at construction.
#[derive(Debug, Clone)]
pub struct LexicalEncoder<T: IdType> {
    dictionary: Arc<LexicalDictionary<T>>,
    tokenizer: LanguageTokenizer,
    options: EncoderOptions,
}

impl<T: IdType> LexicalEncoder<T> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `dictionary` - the shared lexical dictionary.
    /// * `tokenizer` - the language tokenizer.
    /// * `options` - the buffer shape.
    ///
    /// ## Returns
    /// A `Result` containing the encoder, or an error for a zero-sized shape.
    pub fn new(
        dictionary: Arc<LexicalDictionary<T>>,
        tokenizer: LanguageTokenizer,
        options: EncoderOptions,
    ) -> SCResult<Self> {
        options.validate()?;
        Ok(Self {
            dictionary,
            tokenizer,
            options,
        })
    }

    /// Get the shared dictionary.
    pub fn dictionary(&self) -> &Arc<LexicalDictionary<T>> {
        &self.dictionary
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &LanguageTokenizer {
        &self.tokenizer
    }

    /// Fallback ids for a word missing from the dictionary.
    ///
    /// Words longer than two characters resolve to their bigram ids when
    /// *every* bigram is known. Otherwise the ids of the word's known
    /// characters are used, in order, skipping unknown characters and
    /// repeating repeated ones.
    ///
    /// The result is not truncated to ``max_ngrams``.
    pub fn word_ids_from_ngrams(
        &self,
        word: &str,
    ) -> Vec<T> {
        let mut ids: Vec<T> = Vec::new();

        if word.chars().count() > 2 {
            let mut complete = true;
            for bigram in self.tokenizer.split_word_to_bigrams(word) {
                match self.dictionary.get(&bigram) {
                    Some(id) => ids.push(id),
                    None => {
                        complete = false;
                        break;
                    }
                }
            }
            if complete {
                return ids;
            }
            ids.clear();
        }

        for c in word.chars() {
            if let Some(id) = self.dictionary.get_char(c) {
                ids.push(id);
            }
        }
        ids
    }

    /// Encode a single word into a ``max_ngrams`` row.
    ///
    /// The row is expected to be zeroed.
    fn encode_word_row(
        &self,
        word: &str,
        row: &mut [T],
    ) {
        if let Some(id) = self.dictionary.get(word) {
            row[0] = id;
            return;
        }

        let mut ids = self.word_ids_from_ngrams(word);
        if ids.len() > row.len() {
            log::warn!(
                "word {word:?} has {} ngram ids; truncating to {}",
                ids.len(),
                row.len()
            );
            ids.truncate(row.len());
        }
        row[..ids.len()].copy_from_slice(&ids);
    }

    fn split_words_for_block(
        &self,
        sentence: &str,
    ) -> Vec<String> {
        let mut words = self.tokenizer.split_to_words(sentence);
        if words.len() > self.options.max_words {
            log::debug!(
                "sentence has {} words; dropping words past {}",
                words.len(),
                self.options.max_words
            );
            words.truncate(self.options.max_words);
        }
        words
    }
}

impl<T: IdType> SentenceEncoder<T> for LexicalEncoder<T> {
    fn options(&self) -> &EncoderOptions {
        &self.options
    }

    fn encode_sentence_words(
        &self,
        sentence: &str,
        block: &mut [T],
    ) {
        block.fill(T::zero());
        let words = self.split_words_for_block(sentence);
        for (word, row) in words.iter().zip(block.chunks_mut(self.options.max_ngrams)) {
            self.encode_word_row(word, row);
        }
    }

    fn encode_sentence_characters(
        &self,
        sentence: &str,
        block: &mut [T],
    ) {
        block.fill(T::zero());
        let words = self.split_words_for_block(sentence);
        for (word, row) in words.iter().zip(block.chunks_mut(self.options.max_ngrams)) {
            for (slot, c) in row.iter_mut().zip(word.chars()) {
                *slot = self.dictionary.get_char(c).unwrap_or_else(T::zero);
            }
        }
    }
}
