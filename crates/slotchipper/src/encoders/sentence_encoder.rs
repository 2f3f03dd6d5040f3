//! # Sentence Encoder Trait

use crate::{
    encoders::{EncoderOptions, IdBuffer},
    types::IdType,
};

/// A trait for sentence encoders.
///
/// Each sentence is written into its own ``[max_words, max_ngrams]`` block;
/// the provided batch methods stack the blocks into an [`IdBuffer`].
pub trait SentenceEncoder<T: IdType>: Send + Sync {
    /// Return the buffer shape options.
    fn options(&self) -> &EncoderOptions;

    /// Encode one sentence's words into a sentence block.
    ///
    /// ## Arguments
    /// * `sentence` - the raw sentence text.
    /// * `block` - the target block, ``max_words * max_ngrams`` long.
    fn encode_sentence_words(
        &self,
        sentence: &str,
        block: &mut [T],
    );

    /// Encode one sentence's characters into a sentence block.
    ///
    /// ## Arguments
    /// * `sentence` - the raw sentence text.
    /// * `block` - the target block, ``max_words * max_ngrams`` long.
    fn encode_sentence_characters(
        &self,
        sentence: &str,
        block: &mut [T],
    );

    /// Encode a batch of sentences by word.
    ///
    /// ## Arguments
    /// * `sentences` - the batch of raw sentences.
    ///
    /// ## Returns
    /// A zero-padded ``[batch, max_words, max_ngrams]`` buffer.
    fn encode_words<S: AsRef<str> + Sync>(
        &self,
        sentences: &[S],
    ) -> IdBuffer<T> {
        let options = self.options();
        let mut buffer = IdBuffer::zeros(sentences.len(), options.max_words, options.max_ngrams);
        for (idx, sentence) in sentences.iter().enumerate() {
            self.encode_sentence_words(sentence.as_ref(), buffer.sentence_mut(idx));
        }
        buffer
    }

    /// Encode a batch of sentences by character.
    ///
    /// ## Arguments
    /// * `sentences` - the batch of raw sentences.
    ///
    /// ## Returns
    /// A zero-padded ``[batch, max_words, max_ngrams]`` buffer.
    fn encode_characters<S: AsRef<str> + Sync>(
        &self,
        sentences: &[S],
    ) -> IdBuffer<T> {
        let options = self.options();
        let mut buffer = IdBuffer::zeros(sentences.len(), options.max_words, options.max_ngrams);
        for (idx, sentence) in sentences.iter().enumerate() {
            self.encode_sentence_characters(sentence.as_ref(), buffer.sentence_mut(idx));
        }
        buffer
    }
}
