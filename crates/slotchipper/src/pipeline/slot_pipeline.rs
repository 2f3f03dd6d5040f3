//! # Slot Pipeline

use std::sync::Arc;

use crate::{
    SCResult,
    batching,
    decoders::{
        IntentDecoder,
        IntentPrediction,
        SlotMap,
        SlotPrediction,
        SpanDecoder,
        TagPrediction,
    },
    dictionary::LexicalDictionary,
    encoders::{IdBuffer, LexicalEncoder, SentenceEncoder},
    language::LanguageTokenizer,
    pipeline::{PipelineLabels, PipelineOptions},
    types::IdType,
};

/// The combined intent and slot prediction of one sentence.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SentencePrediction {
    /// The original sentence text.
    pub sentence: String,

    /// The predicted intent name.
    pub intent: String,

    /// The intent's probability.
    pub confidence: f32,

    /// The emitted slot spans.
    pub slots: SlotMap,
}

/// Encoding and decoding around an external tagger / classifier.
///
/// ```text
/// sentences -> encode_words / encode_characters -> [models] -> probabilities
///           -> decode_intents / decode_slots -> predictions
/// ```
#[derive(Debug, Clone)]
pub struct SlotPipeline<T: IdType> {
    options: PipelineOptions,
    encoder: LexicalEncoder<T>,
    span_decoder: SpanDecoder,
    intent_decoder: IntentDecoder,
}

impl<T: IdType> SlotPipeline<T> {
    /// Build a pipeline.
    ///
    /// ## Arguments
    /// * `dictionary` - the shared lexical dictionary.
    /// * `labels` - the models' ordered slot labels and intents.
    /// * `options` - the pipeline options.
    ///
    /// ## Returns
    /// A `Result` containing the pipeline, or a configuration error.
    pub fn new(
        dictionary: Arc<LexicalDictionary<T>>,
        labels: PipelineLabels,
        options: PipelineOptions,
    ) -> SCResult<Self> {
        options.validate()?;

        let encoder = LexicalEncoder::new(dictionary, options.language.tokenizer(), options.encoder)?;
        let span_decoder = SpanDecoder::new(labels.slots, options.slots.clone());
        let intent_decoder = IntentDecoder::new(labels.intents, options.intents);

        log::info!(
            "pipeline ready: language={}, dictionary={} keys, {} slot labels, {} intents",
            options.language,
            encoder.dictionary().len(),
            span_decoder.labels().len(),
            intent_decoder.intents().len(),
        );

        Ok(Self {
            options,
            encoder,
            span_decoder,
            intent_decoder,
        })
    }

    /// Get the pipeline options.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &LanguageTokenizer {
        self.encoder.tokenizer()
    }

    /// Get the encoder.
    pub fn encoder(&self) -> &LexicalEncoder<T> {
        &self.encoder
    }

    /// Get the span decoder.
    pub fn span_decoder(&self) -> &SpanDecoder {
        &self.span_decoder
    }

    /// Get the intent decoder.
    pub fn intent_decoder(&self) -> &IntentDecoder {
        &self.intent_decoder
    }

    /// Split sentences into batches of the configured batch size.
    pub fn batches<'a, S>(
        &self,
        sentences: &'a [S],
    ) -> SCResult<Vec<&'a [S]>> {
        batching::chunk(sentences, self.options.batch_size)
    }

    /// Encode sentences by word; see [`SentenceEncoder::encode_words`].
    pub fn encode_words<S: AsRef<str> + Sync>(
        &self,
        sentences: &[S],
    ) -> IdBuffer<T> {
        self.encoder.encode_words(sentences)
    }

    /// Encode sentences by character; see [`SentenceEncoder::encode_characters`].
    pub fn encode_characters<S: AsRef<str> + Sync>(
        &self,
        sentences: &[S],
    ) -> IdBuffer<T> {
        self.encoder.encode_characters(sentences)
    }

    /// Decode the tagger's flat ``[batch, max_words, num_slot_labels]`` output.
    ///
    /// ## Arguments
    /// * `sentences` - the sentences that were encoded.
    /// * `flat` - the row-major tag probabilities.
    pub fn decode_slots<S: AsRef<str>>(
        &self,
        sentences: &[S],
        flat: &[f32],
    ) -> SCResult<Vec<SlotPrediction>> {
        let predictions = TagPrediction::from_batch_probabilities(
            flat,
            self.options.encoder.max_words,
            self.span_decoder.labels().len(),
        )?;
        self.decode_slot_predictions(sentences, &predictions)
    }

    /// Decode already reduced per-word tag predictions.
    pub fn decode_slot_predictions<S, P>(
        &self,
        sentences: &[S],
        predictions: &[P],
    ) -> SCResult<Vec<SlotPrediction>>
    where
        S: AsRef<str>,
        P: AsRef<[TagPrediction]>,
    {
        self.span_decoder
            .decode_batch(self.tokenizer(), sentences, predictions)
    }

    /// Decode the classifier's flat ``[batch, num_intents]`` output.
    pub fn decode_intents<S: AsRef<str>>(
        &self,
        sentences: &[S],
        flat: &[f32],
    ) -> SCResult<Vec<IntentPrediction>> {
        self.intent_decoder.decode_batch(sentences, flat)
    }

    /// The tagger's one-hot intent input for a batch of intent predictions.
    pub fn encode_intents(
        &self,
        predictions: &[IntentPrediction],
    ) -> Vec<f32> {
        self.intent_decoder.one_hot_batch(predictions)
    }

    /// Decode and combine both model outputs.
    ///
    /// ## Arguments
    /// * `sentences` - the sentences that were encoded.
    /// * `intent_flat` - the classifier's ``[batch, num_intents]`` output.
    /// * `tag_flat` - the tagger's ``[batch, max_words, num_slot_labels]`` output.
    pub fn predict<S: AsRef<str>>(
        &self,
        sentences: &[S],
        intent_flat: &[f32],
        tag_flat: &[f32],
    ) -> SCResult<Vec<SentencePrediction>> {
        let intents = self.decode_intents(sentences, intent_flat)?;
        let slots = self.decode_slots(sentences, tag_flat)?;

        Ok(intents
            .into_iter()
            .zip(slots)
            .map(|(intent, slots)| SentencePrediction {
                sentence: intent.sentence,
                intent: intent.intent,
                confidence: intent.confidence,
                slots: slots.slots,
            })
            .collect())
    }
}
