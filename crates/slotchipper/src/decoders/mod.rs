//! # Prediction Decoders
//!
//! Decoders turn the tagger's and classifier's probability outputs back
//! into named predictions.
//!
//! * [`SpanDecoder`] - per-word tag predictions to labeled, confidence-scored spans.
//! * [`IntentDecoder`] - per-sentence intent probabilities to an intent name.
//! * [`LabelSet`] - the ordered label list; **index order is the model contract**.
//!
//! ## Example
//!
//! ```rust
//! use slotchipper::decoders::{LabelSet, SpanDecoder, SpanDecoderOptions, TagPrediction};
//!
//! let decoder = SpanDecoder::new(
//!     LabelSet::new(["O", "B-city"]).unwrap(),
//!     SpanDecoderOptions::default().with_low_confidence_threshold(0.3),
//! );
//!
//! let predictions = [
//!     TagPrediction::new(1, 0.9),
//!     TagPrediction::new(1, 0.8),
//!     TagPrediction::new(0, 0.95),
//! ];
//! let slots = decoder.decode_words(&["san", "francisco", "today"], &predictions);
//!
//! assert_eq!(slots["B-city"][0].value, "san francisco");
//! assert!((slots["B-city"][0].confidence - 0.85).abs() < 1e-6);
//! ```

mod decoder_options;
mod intent_decoder;
mod label_set;
mod slot_prediction;
mod span_decoder;
mod tag_prediction;

#[doc(inline)]
pub use decoder_options::{
    DEFAULT_INTENT_CONFIDENCE_THRESHOLD,
    DEFAULT_OUTSIDE_LABEL,
    DEFAULT_SLOT_CONFIDENCE_THRESHOLD,
    IntentDecoderOptions,
    SpanDecoderOptions,
};
#[doc(inline)]
pub use intent_decoder::{IntentDecoder, IntentPrediction};
#[doc(inline)]
pub use label_set::LabelSet;
#[doc(inline)]
pub use slot_prediction::{SlotMap, SlotPrediction, SlotSpan};
#[doc(inline)]
pub use span_decoder::SpanDecoder;
#[doc(inline)]
pub use tag_prediction::{TagPrediction, argmax};
