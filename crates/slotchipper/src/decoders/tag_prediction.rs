//! # Tag Predictions
//!
//! Reduces the tagger's per-word probability vectors to
//! ``(highest_index, confidence)`` pairs.

use crate::{SCResult, SlotchipperError};

/// The most probable label index of one word, and its probability.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPrediction {
    /// Index into the ordered label set.
    pub highest_index: usize,

    /// The probability of `highest_index`, in ``[0, 1]``.
    pub confidence: f32,
}

/// The first strict maximum of a probability vector.
///
/// ## Returns
/// ``(index, value)``; ``(0, 0.0)`` for an empty vector.
pub fn argmax(probabilities: &[f32]) -> (usize, f32) {
    let mut highest_index = 0;
    let mut confidence = probabilities.first().copied().unwrap_or(0.0);
    for (idx, &p) in probabilities.iter().enumerate().skip(1) {
        if confidence < p {
            highest_index = idx;
            confidence = p;
        }
    }
    (highest_index, confidence)
}

impl TagPrediction {
    /// Create a new prediction.
    pub fn new(
        highest_index: usize,
        confidence: f32,
    ) -> Self {
        Self {
            highest_index,
            confidence,
        }
    }

    /// Reduce one word's probability vector.
    ///
    /// Ties resolve to the lowest index.
    pub fn from_probabilities(probabilities: &[f32]) -> Self {
        let (highest_index, confidence) = argmax(probabilities);
        Self::new(highest_index, confidence)
    }

    /// Reduce the tagger's flat ``[batch, max_words, num_labels]`` output.
    ///
    /// ## Arguments
    /// * `flat` - the row-major probabilities.
    /// * `max_words` - words per sentence.
    /// * `num_labels` - probabilities per word.
    ///
    /// ## Returns
    /// A `Result` containing ``max_words`` predictions per sentence.
    pub fn from_batch_probabilities(
        flat: &[f32],
        max_words: usize,
        num_labels: usize,
    ) -> SCResult<Vec<Vec<Self>>> {
        let sentence_len = max_words * num_labels;
        if sentence_len == 0 || flat.len() % sentence_len != 0 {
            return Err(SlotchipperError::InvalidShape(format!(
                "{} probabilities do not fit [_, {max_words}, {num_labels}]",
                flat.len()
            )));
        }

        Ok(flat
            .chunks(sentence_len)
            .map(|sentence| {
                sentence
                    .chunks(num_labels)
                    .map(Self::from_probabilities)
                    .collect()
            })
            .collect())
    }
}

impl From<(usize, f32)> for TagPrediction {
    fn from((highest_index, confidence): (usize, f32)) -> Self {
        Self::new(highest_index, confidence)
    }
}
