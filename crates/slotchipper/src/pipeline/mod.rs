//! # Slot Pipeline
//!
//! [`SlotPipeline`] wires one language tokenizer, one shared dictionary,
//! the lexical encoder, and both decoders around the external models.
//!
//! Configuration is [`PipelineOptions`] (camelCase JSON) and the models'
//! ordered [`PipelineLabels`].

mod pipeline_labels;
mod pipeline_options;
mod slot_pipeline;

#[doc(inline)]
pub use pipeline_labels::PipelineLabels;
#[doc(inline)]
pub use pipeline_options::{DEFAULT_BATCH_SIZE, PipelineOptions};
#[doc(inline)]
pub use slot_pipeline::{SentencePrediction, SlotPipeline};
