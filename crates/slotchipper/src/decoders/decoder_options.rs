//! # Decoder Options

/// Default span decoder threshold.
pub const DEFAULT_SLOT_CONFIDENCE_THRESHOLD: f32 = 0.2;

/// Default intent decoder threshold.
pub const DEFAULT_INTENT_CONFIDENCE_THRESHOLD: f32 = 0.3;

/// Default label for words outside any slot.
pub const DEFAULT_OUTSIDE_LABEL: &str = "O";

/// Options for configuring a [`SpanDecoder`](crate::decoders::SpanDecoder).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpanDecoderOptions {
    /// Spans whose confidence falls below this are dropped.
    pub low_confidence_threshold: f32,

    /// The label never emitted as a span.
    pub outside_label: String,
}

impl Default for SpanDecoderOptions {
    fn default() -> Self {
        Self {
            low_confidence_threshold: DEFAULT_SLOT_CONFIDENCE_THRESHOLD,
            outside_label: DEFAULT_OUTSIDE_LABEL.to_string(),
        }
    }
}

impl SpanDecoderOptions {
    /// Set the confidence threshold and return the options.
    pub fn with_low_confidence_threshold(
        mut self,
        low_confidence_threshold: f32,
    ) -> Self {
        self.low_confidence_threshold = low_confidence_threshold;
        self
    }

    /// Set the outside label and return the options.
    pub fn with_outside_label<S: Into<String>>(
        mut self,
        outside_label: S,
    ) -> Self {
        self.outside_label = outside_label.into();
        self
    }
}

/// Options for configuring an [`IntentDecoder`](crate::decoders::IntentDecoder).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntentDecoderOptions {
    /// Predictions below this are reported as low confidence.
    pub low_confidence_threshold: f32,
}

impl Default for IntentDecoderOptions {
    fn default() -> Self {
        Self {
            low_confidence_threshold: DEFAULT_INTENT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl IntentDecoderOptions {
    /// Set the confidence threshold and return the options.
    pub fn with_low_confidence_threshold(
        mut self,
        low_confidence_threshold: f32,
    ) -> Self {
        self.low_confidence_threshold = low_confidence_threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options: SpanDecoderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.low_confidence_threshold, 0.2);
        assert_eq!(options.outside_label, "O");

        let options: IntentDecoderOptions =
            serde_json::from_str(r#"{"lowConfidenceThreshold": 0.5}"#).unwrap();
        assert_eq!(options.low_confidence_threshold, 0.5);
        assert_eq!(IntentDecoderOptions::default().low_confidence_threshold, 0.3);
    }

    #[test]
    fn test_builders() {
        let options = SpanDecoderOptions::default()
            .with_low_confidence_threshold(0.4)
            .with_outside_label("none");
        assert_eq!(options.low_confidence_threshold, 0.4);
        assert_eq!(options.outside_label, "none");
    }
}
