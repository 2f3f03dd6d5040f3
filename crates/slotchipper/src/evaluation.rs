//! # Prediction Scoring
//!
//! Scores decoded predictions against labeled test sets.

use crate::{
    SCResult,
    SlotchipperError,
    decoders::{IntentDecoder, IntentPrediction},
};

/// Running ``correct / wrong / low confidence`` counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionStats {
    /// Predictions matching the expectation.
    pub correct: usize,

    /// Predictions not matching the expectation.
    pub wrong: usize,

    /// Predictions below the confidence threshold; counted instead of
    /// correct / wrong.
    pub low_confidence: usize,
}

impl PredictionStats {
    /// The total number of scored predictions.
    pub fn total(&self) -> usize {
        self.correct + self.wrong + self.low_confidence
    }

    /// The fraction of predictions that were correct; 0 when empty.
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct as f64 / total as f64,
        }
    }

    /// Add another set of counts into this one.
    pub fn merge(
        &mut self,
        other: &PredictionStats,
    ) {
        self.correct += other.correct;
        self.wrong += other.wrong;
        self.low_confidence += other.low_confidence;
    }

    /// Score intent predictions against expected intent indices.
    ///
    /// Low confidence takes precedence: such predictions are neither
    /// correct nor wrong.
    ///
    /// ## Arguments
    /// * `decoder` - supplies the intent names and the threshold.
    /// * `expected` - per sentence, the expected intent index.
    /// * `predictions` - per sentence, the decoded prediction.
    pub fn score_intents(
        &mut self,
        decoder: &IntentDecoder,
        expected: &[usize],
        predictions: &[IntentPrediction],
    ) -> SCResult<()> {
        if expected.len() != predictions.len() {
            return Err(SlotchipperError::MismatchedLengths {
                name: "intent predictions",
                expected: expected.len(),
                actual: predictions.len(),
            });
        }

        for (&index, p) in expected.iter().zip(predictions) {
            let correct = decoder.intents().label(index) == Some(p.intent.as_str());
            if decoder.is_low_confidence(p) {
                self.low_confidence += 1;
                log::warn!(
                    "LOW CONFIDENCE (intent: {}, confidence: {}) - {}",
                    p.intent,
                    p.confidence,
                    p.sentence
                );
            } else if correct {
                self.correct += 1;
                log::debug!(
                    "CORRECT (intent: {}, confidence: {}) - {}",
                    p.intent,
                    p.confidence,
                    p.sentence
                );
            } else {
                self.wrong += 1;
                log::error!(
                    "WRONG (intent: {}, confidence: {}) - {}",
                    p.intent,
                    p.confidence,
                    p.sentence
                );
            }
        }
        Ok(())
    }

    /// Score tag index predictions against expected tags.
    ///
    /// A sentence is correct iff every expected tag equals the predicted
    /// tag at the same position; extra predicted positions are ignored.
    ///
    /// ## Arguments
    /// * `sentences` - the sentences, for logging.
    /// * `expected` - per sentence, the expected tag indices.
    /// * `predicted` - per sentence, the predicted tag indices.
    pub fn score_tags<S, E, P>(
        &mut self,
        sentences: &[S],
        expected: &[E],
        predicted: &[P],
    ) -> SCResult<()>
    where
        S: AsRef<str>,
        E: AsRef<[usize]>,
        P: AsRef<[usize]>,
    {
        for (name, len) in [("expected tags", expected.len()), ("predicted tags", predicted.len())] {
            if len != sentences.len() {
                return Err(SlotchipperError::MismatchedLengths {
                    name,
                    expected: sentences.len(),
                    actual: len,
                });
            }
        }

        for ((s, e), p) in sentences.iter().zip(expected).zip(predicted) {
            let (s, e, p) = (s.as_ref(), e.as_ref(), p.as_ref());
            let correct = e
                .iter()
                .enumerate()
                .all(|(idx, tag)| p.get(idx) == Some(tag));
            if correct {
                self.correct += 1;
                log::debug!("CORRECT - {s} expected: {e:?}, predicted: {p:?}");
            } else {
                self.wrong += 1;
                log::error!("WRONG - {s} expected: {e:?}, predicted: {p:?}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::{IntentDecoderOptions, LabelSet};

    fn prediction(
        intent: &str,
        confidence: f32,
    ) -> IntentPrediction {
        IntentPrediction {
            sentence: "s".to_string(),
            intent: intent.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_score_intents() {
        let decoder = IntentDecoder::new(
            LabelSet::new(["greet", "weather"]).unwrap(),
            IntentDecoderOptions::default(),
        );

        let mut stats = PredictionStats::default();
        stats
            .score_intents(
                &decoder,
                &[0, 1, 1, 0],
                &[
                    prediction("greet", 0.9),
                    prediction("greet", 0.8),
                    // Low confidence wins over correct.
                    prediction("weather", 0.1),
                    prediction("weather", 0.29),
                ],
            )
            .unwrap();

        assert_eq!(
            stats,
            PredictionStats {
                correct: 1,
                wrong: 1,
                low_confidence: 2,
            }
        );
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.accuracy(), 0.25);

        assert!(
            stats
                .score_intents(&decoder, &[0], &[])
                .is_err()
        );
    }

    #[test]
    fn test_score_tags() {
        let expected: Vec<Vec<usize>> = vec![vec![0, 1], vec![0, 1], vec![2]];
        let predicted: Vec<Vec<usize>> = vec![vec![0, 1, 0], vec![1, 1], vec![]];

        let mut stats = PredictionStats::default();
        stats
            .score_tags(&["a b", "c d", "e"], &expected, &predicted)
            .unwrap();

        assert_eq!(stats.correct, 1);
        assert_eq!(stats.wrong, 2);
        assert_eq!(stats.low_confidence, 0);

        let mut total = PredictionStats::default();
        total.merge(&stats);
        total.merge(&stats);
        assert_eq!(total.total(), 6);

        assert!(
            stats
                .score_tags(&["a"], &expected[..1], &Vec::<Vec<usize>>::new())
                .is_err()
        );
        assert_eq!(PredictionStats::default().accuracy(), 0.0);
    }
}
