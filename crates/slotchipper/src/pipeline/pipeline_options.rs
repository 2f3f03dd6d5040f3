//! # Pipeline Options

use crate::{
    SCResult,
    SlotchipperError,
    decoders::{IntentDecoderOptions, SpanDecoderOptions},
    encoders::EncoderOptions,
    language::Language,
};

/// Default sentences per batch.
pub const DEFAULT_BATCH_SIZE: usize = 180;

/// Options for configuring a [`SlotPipeline`](crate::pipeline::SlotPipeline).
///
/// Deserializes from camelCase JSON; every field is optional:
///
/// ```json
/// {
///   "language": "es",
///   "batchSize": 64,
///   "encoder": { "maxWords": 24 },
///   "slots": { "lowConfidenceThreshold": 0.25 },
///   "intents": { "lowConfidenceThreshold": 0.3 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineOptions {
    /// Tokenizer language.
    pub language: Language,

    /// Sentences per batch.
    pub batch_size: usize,

    /// Id buffer shape.
    pub encoder: EncoderOptions,

    /// Span decoder options.
    pub slots: SpanDecoderOptions,

    /// Intent decoder options.
    pub intents: IntentDecoderOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            encoder: EncoderOptions::default(),
            slots: SpanDecoderOptions::default(),
            intents: IntentDecoderOptions::default(),
        }
    }
}

impl PipelineOptions {
    /// Set the language and return the options.
    pub fn with_language(
        mut self,
        language: Language,
    ) -> Self {
        self.language = language;
        self
    }

    /// Parse and set the language code and return the options.
    ///
    /// ## Returns
    /// A `Result` containing the options, or [`SlotchipperError::UnsupportedLanguage`].
    pub fn with_language_code(
        self,
        code: &str,
    ) -> SCResult<Self> {
        Ok(self.with_language(Language::from_code(code)?))
    }

    /// Set the batch size and return the options.
    pub fn with_batch_size(
        mut self,
        batch_size: usize,
    ) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the encoder options and return the options.
    pub fn with_encoder(
        mut self,
        encoder: EncoderOptions,
    ) -> Self {
        self.encoder = encoder;
        self
    }

    /// Set the span decoder options and return the options.
    pub fn with_slots(
        mut self,
        slots: SpanDecoderOptions,
    ) -> Self {
        self.slots = slots;
        self
    }

    /// Set the intent decoder options and return the options.
    pub fn with_intents(
        mut self,
        intents: IntentDecoderOptions,
    ) -> Self {
        self.intents = intents;
        self
    }

    /// Reject unusable shapes and batch sizes.
    pub fn validate(&self) -> SCResult<()> {
        if self.batch_size == 0 {
            return Err(SlotchipperError::InvalidShape(
                "batch_size must be > 0".to_string(),
            ));
        }
        self.encoder.validate()
    }
}
