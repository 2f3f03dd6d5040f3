//! # `slotchipper` Intent / Slot NLU Core
//!
//! This is the deterministic text-processing core around an intent
//! classifier and a slot tagger: the code on either side of the models.
//!
//! ```text
//! sentences -> tokenizer -> lexical encoder -> id buffers
//!           -> [embedding + classifier + tagger models]
//!           -> probabilities -> decoders -> predictions
//! ```
//!
//! See:
//! * [`language`] to sanitize and split sentences, per language.
//! * [`dictionary`] to load and filter the lexical dictionary.
//! * [`encoders`] to encode sentences into ``[batch, max_words, max_ngrams]`` id buffers.
//! * [`decoders`] to rebuild intents and labeled slot spans from model output.
//! * [`pipeline`] for the combined, configurable pipeline.
//! * [`batching`] and [`evaluation`] for dataset batching and scoring.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::SCHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables batch parallelism wrappers using the ``rayon`` crate.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use slotchipper::{
//!     decoders::LabelSet,
//!     dictionary::LexicalDictionary,
//!     pipeline::{PipelineLabels, PipelineOptions, SlotPipeline},
//! };
//!
//! type T = u32;
//!
//! let dictionary = LexicalDictionary::<T>::from_keys(["__", "to", "paris"]).unwrap();
//! let labels = PipelineLabels {
//!     slots: LabelSet::new(["O", "city"]).unwrap(),
//!     intents: LabelSet::new(["greet", "travel"]).unwrap(),
//! };
//! let pipeline = SlotPipeline::new(
//!     Arc::new(dictionary),
//!     labels,
//!     PipelineOptions::default().with_language_code("en").unwrap(),
//! )
//! .unwrap();
//!
//! let buffer = pipeline.encode_words(&["To Paris"]);
//! assert_eq!(buffer.row(0, 0)[0], 1);
//! assert_eq!(buffer.row(0, 1)[0], 2);
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod batching;
pub mod decoders;
pub mod dictionary;
pub mod encoders;
pub mod evaluation;
pub mod language;
pub mod pipeline;
pub mod types;

mod errors;

#[doc(inline)]
pub use errors::{SCResult, SlotchipperError};
