//! # Id Buffer ``[batch, max_words, max_ngrams]``

use crate::{SCResult, SlotchipperError, types::IdType};

/// A zero-padded, row-major 3D id buffer of shape ``[batch, max_words, max_ngrams]``.
///
/// This is the integer tensor layout the embedding model consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdBuffer<T: IdType> {
    batch: usize,
    max_words: usize,
    max_ngrams: usize,
    data: Vec<T>,
}

impl<T: IdType> IdBuffer<T> {
    /// Allocate an all-zero buffer.
    ///
    /// ## Arguments
    /// * `batch` - the number of sentences.
    /// * `max_words` - word rows per sentence.
    /// * `max_ngrams` - ids per word row.
    pub fn zeros(
        batch: usize,
        max_words: usize,
        max_ngrams: usize,
    ) -> Self {
        Self {
            batch,
            max_words,
            max_ngrams,
            data: vec![T::zero(); batch * max_words * max_ngrams],
        }
    }

    /// Wrap existing row-major data.
    ///
    /// ## Returns
    /// A `Result` containing the buffer, or an error if `data` does not fit the shape.
    pub fn from_vec(
        data: Vec<T>,
        batch: usize,
        max_words: usize,
        max_ngrams: usize,
    ) -> SCResult<Self> {
        let expected = batch * max_words * max_ngrams;
        if data.len() != expected {
            return Err(SlotchipperError::InvalidShape(format!(
                "{} ids do not fit [{batch}, {max_words}, {max_ngrams}]",
                data.len()
            )));
        }
        Ok(Self {
            batch,
            max_words,
            max_ngrams,
            data,
        })
    }

    /// The ``[batch, max_words, max_ngrams]`` shape.
    pub fn shape(&self) -> [usize; 3] {
        [self.batch, self.max_words, self.max_ngrams]
    }

    /// The number of sentences.
    pub fn batch(&self) -> usize {
        self.batch
    }

    /// The ids of one sentence, ``max_words * max_ngrams`` long.
    pub fn sentence(
        &self,
        sentence: usize,
    ) -> &[T] {
        let len = self.max_words * self.max_ngrams;
        &self.data[sentence * len..(sentence + 1) * len]
    }

    /// Mutable ids of one sentence.
    pub fn sentence_mut(
        &mut self,
        sentence: usize,
    ) -> &mut [T] {
        let len = self.max_words * self.max_ngrams;
        &mut self.data[sentence * len..(sentence + 1) * len]
    }

    /// The ids of one word row, ``max_ngrams`` long.
    pub fn row(
        &self,
        sentence: usize,
        word: usize,
    ) -> &[T] {
        let start = (sentence * self.max_words + word) * self.max_ngrams;
        &self.data[start..start + self.max_ngrams]
    }

    /// A single id.
    pub fn get(
        &self,
        sentence: usize,
        word: usize,
        ngram: usize,
    ) -> T {
        self.row(sentence, word)[ngram]
    }

    /// The flat row-major data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable flat row-major data.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume into the flat row-major data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Copy out as nested ``sentence -> word -> ids`` vectors.
    pub fn to_nested(&self) -> Vec<Vec<Vec<T>>> {
        (0..self.batch)
            .map(|s| {
                (0..self.max_words)
                    .map(|w| self.row(s, w).to_vec())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        type T = u32;

        let data: Vec<T> = (0..12).collect();
        let buffer = IdBuffer::from_vec(data, 2, 3, 2).unwrap();

        assert_eq!(buffer.shape(), [2, 3, 2]);
        assert_eq!(buffer.batch(), 2);
        assert_eq!(buffer.sentence(1), &[6, 7, 8, 9, 10, 11]);
        assert_eq!(buffer.row(1, 2), &[10, 11]);
        assert_eq!(buffer.get(0, 1, 1), 3);
        assert_eq!(buffer.to_nested()[1][0], vec![6, 7]);

        assert!(IdBuffer::<T>::from_vec(vec![0; 5], 2, 3, 2).is_err());
    }

    #[test]
    fn test_zeros() {
        type T = u16;

        let mut buffer = IdBuffer::<T>::zeros(1, 2, 2);
        assert!(buffer.as_slice().iter().all(|&id| id == 0));

        buffer.sentence_mut(0)[3] = 9;
        assert_eq!(buffer.row(0, 1), &[0, 9]);
        assert_eq!(buffer.into_vec(), vec![0, 0, 0, 9]);
    }
}
