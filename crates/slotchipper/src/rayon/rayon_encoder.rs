//! # Parallel Encoder

use crate::{
    encoders::{EncoderOptions, IdBuffer, SentenceEncoder},
    types::IdType,
};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Encodes the sentence blocks of a batch with ``rayon``; the inner
/// encoder (and its dictionary) is shared read-only across threads.
#[derive(Clone)]
pub struct ParallelRayonEncoder<T: IdType, E: SentenceEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: std::marker::PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: IdType,
    E: SentenceEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The sentence encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }

    fn encode_parallel<S, F>(
        &self,
        sentences: &[S],
        encode_block: F,
    ) -> IdBuffer<T>
    where
        S: AsRef<str> + Sync,
        F: Fn(&str, &mut [T]) + Sync,
    {
        use rayon::prelude::*;

        let options = self.options();
        let mut buffer = IdBuffer::zeros(sentences.len(), options.max_words, options.max_ngrams);
        let block_len = options.sentence_len().max(1);
        buffer
            .as_mut_slice()
            .par_chunks_mut(block_len)
            .zip(sentences.par_iter())
            .for_each(|(block, sentence)| encode_block(sentence.as_ref(), block));
        buffer
    }
}

impl<T, E> SentenceEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: IdType,
    E: SentenceEncoder<T>,
{
    fn options(&self) -> &EncoderOptions {
        self.inner.options()
    }

    fn encode_sentence_words(
        &self,
        sentence: &str,
        block: &mut [T],
    ) {
        self.inner.encode_sentence_words(sentence, block)
    }

    fn encode_sentence_characters(
        &self,
        sentence: &str,
        block: &mut [T],
    ) {
        self.inner.encode_sentence_characters(sentence, block)
    }

    fn encode_words<S: AsRef<str> + Sync>(
        &self,
        sentences: &[S],
    ) -> IdBuffer<T> {
        self.encode_parallel(sentences, |sentence, block| {
            self.inner.encode_sentence_words(sentence, block)
        })
    }

    fn encode_characters<S: AsRef<str> + Sync>(
        &self,
        sentences: &[S],
    ) -> IdBuffer<T> {
        self.encode_parallel(sentences, |sentence, block| {
            self.inner.encode_sentence_characters(sentence, block)
        })
    }
}
