//! # Slot Prediction Output

use std::collections::BTreeMap;

/// A labeled run of words and its averaged confidence.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlotSpan {
    /// The span's words, joined by single spaces.
    pub value: String,

    /// The pairwise running average of the word confidences.
    pub confidence: f32,
}

impl SlotSpan {
    /// Create a new span.
    pub fn new<S: Into<String>>(
        value: S,
        confidence: f32,
    ) -> Self {
        Self {
            value: value.into(),
            confidence,
        }
    }
}

/// Map of ``{ label -> spans }``; spans in left-to-right order.
pub type SlotMap = BTreeMap<String, Vec<SlotSpan>>;

/// The decoded slots of one sentence.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct SlotPrediction {
    /// The original sentence text.
    pub sentence: String,

    /// The emitted spans.
    pub slots: SlotMap,
}
