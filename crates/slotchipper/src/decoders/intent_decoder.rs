//! # Intent Decoder

use crate::{
    SCResult,
    SlotchipperError,
    decoders::{IntentDecoderOptions, LabelSet, tag_prediction::argmax},
};

/// The most probable intent of one sentence.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntentPrediction {
    /// The original sentence text.
    pub sentence: String,

    /// The predicted intent name.
    pub intent: String,

    /// The intent's probability.
    pub confidence: f32,
}

/// Intent classifier output decoder.
///
/// Probability vector index `n` is the `n`-th intent of the [`LabelSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct IntentDecoder {
    intents: LabelSet,
    options: IntentDecoderOptions,
}

impl IntentDecoder {
    /// Create a new decoder.
    ///
    /// ## Arguments
    /// * `intents` - the classifier's ordered intents.
    /// * `options` - the low confidence threshold.
    pub fn new(
        intents: LabelSet,
        options: IntentDecoderOptions,
    ) -> Self {
        Self { intents, options }
    }

    /// Get the ordered intents.
    pub fn intents(&self) -> &LabelSet {
        &self.intents
    }

    /// Get the decoder options.
    pub fn options(&self) -> &IntentDecoderOptions {
        &self.options
    }

    /// Is the prediction below the low confidence threshold?
    pub fn is_low_confidence(
        &self,
        prediction: &IntentPrediction,
    ) -> bool {
        prediction.confidence < self.options.low_confidence_threshold
    }

    /// Decode one sentence's intent probability vector.
    ///
    /// Ties resolve to the lowest index.
    ///
    /// ## Arguments
    /// * `sentence` - the original sentence text.
    /// * `probabilities` - one probability per intent.
    ///
    /// ## Returns
    /// A `Result` containing the prediction, or an error when the vector
    /// length does not match the intent count.
    pub fn decode(
        &self,
        sentence: &str,
        probabilities: &[f32],
    ) -> SCResult<IntentPrediction> {
        if probabilities.len() != self.intents.len() {
            return Err(SlotchipperError::MismatchedLengths {
                name: "intent probabilities",
                expected: self.intents.len(),
                actual: probabilities.len(),
            });
        }

        let (index, confidence) = argmax(probabilities);
        let intent = self.intents.label(index).unwrap_or_default().to_string();
        Ok(IntentPrediction {
            sentence: sentence.to_string(),
            intent,
            confidence,
        })
    }

    /// Decode the classifier's flat ``[batch, num_intents]`` output.
    ///
    /// ## Arguments
    /// * `sentences` - the original sentences.
    /// * `flat` - the row-major probabilities.
    ///
    /// ## Returns
    /// A `Result` containing one prediction per sentence.
    pub fn decode_batch<S: AsRef<str>>(
        &self,
        sentences: &[S],
        flat: &[f32],
    ) -> SCResult<Vec<IntentPrediction>> {
        let expected = sentences.len() * self.intents.len();
        if flat.len() != expected {
            return Err(SlotchipperError::MismatchedLengths {
                name: "intent probabilities",
                expected,
                actual: flat.len(),
            });
        }

        sentences
            .iter()
            .zip(flat.chunks(self.intents.len()))
            .map(|(s, p)| self.decode(s.as_ref(), p))
            .collect()
    }

    /// One-hot encode an intent name for the tagger's intent input.
    ///
    /// Unknown intents encode as all zeros.
    pub fn one_hot(
        &self,
        intent: &str,
    ) -> Vec<f32> {
        let mut encoded = vec![0.0; self.intents.len()];
        if let Some(idx) = self.intents.index_of(intent) {
            encoded[idx] = 1.0;
        }
        encoded
    }

    /// One-hot encode a batch of predictions, row-major ``[batch, num_intents]``.
    pub fn one_hot_batch(
        &self,
        predictions: &[IntentPrediction],
    ) -> Vec<f32> {
        predictions
            .iter()
            .flat_map(|p| self.one_hot(&p.intent))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder() -> IntentDecoder {
        IntentDecoder::new(
            LabelSet::new(["greet", "book_flight", "weather"]).unwrap(),
            IntentDecoderOptions::default(),
        )
    }

    #[test]
    fn test_decode() {
        let decoder = decoder();

        let prediction = decoder.decode("fly me to oslo", &[0.1, 0.7, 0.2]).unwrap();
        assert_eq!(prediction.intent, "book_flight");
        assert_eq!(prediction.confidence, 0.7);
        assert_eq!(prediction.sentence, "fly me to oslo");
        assert!(!decoder.is_low_confidence(&prediction));

        let tie = decoder.decode("hm", &[0.2, 0.2, 0.2]).unwrap();
        assert_eq!(tie.intent, "greet");
        assert!(decoder.is_low_confidence(&tie));

        assert!(decoder.decode("hm", &[0.5, 0.5]).is_err());
    }

    #[test]
    fn test_decode_batch() {
        let decoder = decoder();

        #[rustfmt::skip]
        let flat = [
            0.8, 0.1, 0.1,
            0.0, 0.1, 0.9,
        ];
        let predictions = decoder.decode_batch(&["hi", "rain?"], &flat).unwrap();
        assert_eq!(
            predictions
                .iter()
                .map(|p| p.intent.as_str())
                .collect::<Vec<_>>(),
            vec!["greet", "weather"]
        );

        assert!(decoder.decode_batch(&["hi"], &flat).is_err());
    }

    #[test]
    fn test_one_hot() {
        let decoder = decoder();

        assert_eq!(decoder.one_hot("weather"), vec![0.0, 0.0, 1.0]);
        assert_eq!(decoder.one_hot("unknown"), vec![0.0, 0.0, 0.0]);

        let predictions = decoder.decode_batch(&["a", "b"], &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(
            decoder.one_hot_batch(&predictions),
            vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
    }
}
