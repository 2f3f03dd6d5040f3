//! # Span Decoder
//!
//! Rebuilds labeled spans from per-word tag predictions with a
//! left-to-right state machine.
//!
//! Consecutive words sharing a label grow the current span; its confidence
//! is the *pairwise* running average ``(word + current) / 2``, not the
//! arithmetic mean. A label change closes the current span, which is
//! emitted when its label is not the outside label and its confidence
//! clears the threshold. The final span is closed exactly once, after
//! the last word.

use crate::{
    SCResult,
    SlotchipperError,
    decoders::{LabelSet, SlotMap, SlotPrediction, SlotSpan, SpanDecoderOptions, TagPrediction},
    language::WordTokenizer,
};

/// The span under construction.
#[derive(Debug, Default)]
struct OpenSpan<'a> {
    label: &'a str,
    value: String,
    confidence: f32,
}

/// Tag prediction span decoder.
///
/// Predicted indices resolve positionally through the [`LabelSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpanDecoder {
    labels: LabelSet,
    options: SpanDecoderOptions,
}

impl SpanDecoder {
    /// Create a new decoder.
    ///
    /// ## Arguments
    /// * `labels` - the tagger's ordered slot labels.
    /// * `options` - threshold and outside label.
    pub fn new(
        labels: LabelSet,
        options: SpanDecoderOptions,
    ) -> Self {
        Self { labels, options }
    }

    /// Get the ordered slot labels.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Get the decoder options.
    pub fn options(&self) -> &SpanDecoderOptions {
        &self.options
    }

    fn flush(
        &self,
        span: &mut OpenSpan<'_>,
        slots: &mut SlotMap,
    ) {
        if span.label.is_empty()
            || span.label == self.options.outside_label
            || span.confidence < self.options.low_confidence_threshold
        {
            return;
        }
        slots
            .entry(span.label.to_string())
            .or_default()
            .push(SlotSpan::new(core::mem::take(&mut span.value), span.confidence));
    }

    /// Decode the spans of one tokenized sentence.
    ///
    /// Words without a prediction, or whose predicted index has no label,
    /// are skipped. Skipped trailing words do not suppress the final flush
    /// of the open span.
    ///
    /// ## Arguments
    /// * `words` - the sentence's word tokens.
    /// * `predictions` - the per-word tag predictions, aligned with `words`.
    ///
    /// ## Returns
    /// The emitted spans by label.
    pub fn decode_words<S: AsRef<str>>(
        &self,
        words: &[S],
        predictions: &[TagPrediction],
    ) -> SlotMap {
        let mut slots = SlotMap::new();
        let mut current = OpenSpan::default();

        for (idx, word) in words.iter().enumerate() {
            let word = word.as_ref();
            let Some(prediction) = predictions.get(idx) else {
                log::debug!("no tag prediction for word {idx} ({word:?}); skipping");
                continue;
            };

            if current.confidence == 0.0 {
                current.confidence = prediction.confidence;
            }

            let Some(label) = self.labels.label(prediction.highest_index) else {
                log::debug!(
                    "no label for predicted index {} at word {idx} ({word:?}); skipping",
                    prediction.highest_index
                );
                continue;
            };

            if label == current.label {
                current.value.push(' ');
                current.value.push_str(word);
                current.confidence = (prediction.confidence + current.confidence) / 2.0;
            } else {
                self.flush(&mut current, &mut slots);
                current = OpenSpan {
                    label,
                    value: word.to_string(),
                    confidence: prediction.confidence,
                };
            }
        }

        self.flush(&mut current, &mut slots);
        slots
    }

    /// Tokenize and decode one sentence.
    ///
    /// ## Arguments
    /// * `tokenizer` - the tokenizer the sentence was encoded with.
    /// * `sentence` - the original sentence text.
    /// * `predictions` - the per-word tag predictions.
    pub fn decode_sentence<W: WordTokenizer + ?Sized>(
        &self,
        tokenizer: &W,
        sentence: &str,
        predictions: &[TagPrediction],
    ) -> SlotPrediction {
        let words = tokenizer.split_to_words(sentence);
        SlotPrediction {
            sentence: sentence.to_string(),
            slots: self.decode_words(&words, predictions),
        }
    }

    /// Tokenize and decode a batch of sentences.
    ///
    /// ## Arguments
    /// * `tokenizer` - the tokenizer the sentences were encoded with.
    /// * `sentences` - the original sentences.
    /// * `predictions` - per sentence, the per-word tag predictions.
    ///
    /// ## Returns
    /// A `Result` containing one prediction per sentence, or an error
    /// when the lists differ in length.
    pub fn decode_batch<W, S, P>(
        &self,
        tokenizer: &W,
        sentences: &[S],
        predictions: &[P],
    ) -> SCResult<Vec<SlotPrediction>>
    where
        W: WordTokenizer + ?Sized,
        S: AsRef<str>,
        P: AsRef<[TagPrediction]>,
    {
        if sentences.len() != predictions.len() {
            return Err(SlotchipperError::MismatchedLengths {
                name: "tag predictions",
                expected: sentences.len(),
                actual: predictions.len(),
            });
        }
        Ok(sentences
            .iter()
            .zip(predictions)
            .map(|(s, p)| self.decode_sentence(tokenizer, s.as_ref(), p.as_ref()))
            .collect())
    }
}
