use slotchipper::{
    decoders::{IntentDecoder, SpanDecoder},
    pipeline::{PipelineLabels, PipelineOptions},
};

/// Pipeline configuration arg group.
///
/// Options are read from an optional JSON file; flags override it.
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Optional pipeline options JSON file.
    #[arg(long)]
    config: Option<String>,

    /// Tokenizer language ("en" or "es").
    #[arg(long)]
    language: Option<String>,

    /// Sentences per batch.
    #[arg(long)]
    batch_size: Option<usize>,

    /// Word rows per sentence.
    #[arg(long)]
    max_words: Option<usize>,

    /// Ids per word row.
    #[arg(long)]
    max_ngrams: Option<usize>,
}

impl ConfigArgs {
    /// Load the options file and apply the overrides.
    pub fn load_options(&self) -> Result<PipelineOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => {
                log::info!("config: {path}");
                let reader = std::io::BufReader::new(std::fs::File::open(path)?);
                serde_json::from_reader(reader)?
            }
            None => PipelineOptions::default(),
        };

        if let Some(code) = &self.language {
            options = options.with_language_code(code)?;
        }
        if let Some(batch_size) = self.batch_size {
            options = options.with_batch_size(batch_size);
        }
        if let Some(max_words) = self.max_words {
            options.encoder = options.encoder.with_max_words(max_words);
        }
        if let Some(max_ngrams) = self.max_ngrams {
            options.encoder = options.encoder.with_max_ngrams(max_ngrams);
        }

        options.validate()?;
        Ok(options)
    }
}

/// Model label arg group.
#[derive(clap::Args, Debug)]
pub struct LabelArgs {
    /// Labels JSON file: ``{ "slots": [..], "intents": [..] }``, in model index order.
    #[arg(long)]
    labels: String,
}

impl LabelArgs {
    /// Load the labels.
    pub fn load_labels(&self) -> Result<PipelineLabels, Box<dyn std::error::Error>> {
        log::info!("labels: {}", self.labels);
        Ok(PipelineLabels::load_path(&self.labels)?)
    }

    /// Build the span and intent decoders.
    pub fn load_decoders(
        &self,
        options: &PipelineOptions,
    ) -> Result<(SpanDecoder, IntentDecoder), Box<dyn std::error::Error>> {
        let labels = self.load_labels()?;
        Ok((
            SpanDecoder::new(labels.slots, options.slots.clone()),
            IntentDecoder::new(labels.intents, options.intents),
        ))
    }
}
