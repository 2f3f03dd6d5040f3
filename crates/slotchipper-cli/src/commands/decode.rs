use std::io::{BufRead, Write};

use slotchipper::{decoders::TagPrediction, pipeline::SentencePrediction};

use crate::{
    config_args::{ConfigArgs, LabelArgs},
    input_output::{InputArgs, OutputArgs, write_json_line},
    logging::LogArgs,
};

/// One sentence of tagger / classifier output.
///
/// ```json
/// { "sentence": "to new york", "tags": [[0, 0.9], [1, 0.8], [1, 0.7]], "intent": [0.1, 0.9] }
/// ```
#[derive(Debug, serde::Deserialize)]
struct DecodeRecord {
    sentence: String,

    /// Per-word ``[highest_index, confidence]`` pairs.
    tags: Vec<(usize, f32)>,

    /// Optional intent probabilities, in intent label order.
    #[serde(default)]
    intent: Option<Vec<f32>>,
}

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    labels: LabelArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    ///
    /// Reads one JSON record per line; writes one prediction per line.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = self.config.load_options()?;
        let tokenizer = options.language.tokenizer();
        let (span_decoder, intent_decoder) = self.labels.load_decoders(&options)?;

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: DecodeRecord = serde_json::from_str(&line)
                .map_err(|e| format!("line {}: {e}", idx + 1))?;

            let tags: Vec<TagPrediction> = record.tags.into_iter().map(TagPrediction::from).collect();
            let slots = span_decoder.decode_sentence(&tokenizer, &record.sentence, &tags);

            match record.intent {
                Some(probabilities) => {
                    let intent = intent_decoder.decode(&record.sentence, &probabilities)?;
                    if intent_decoder.is_low_confidence(&intent) {
                        log::warn!(
                            "low confidence intent {} ({}) - {}",
                            intent.intent,
                            intent.confidence,
                            intent.sentence
                        );
                    }
                    let prediction = SentencePrediction {
                        sentence: slots.sentence,
                        intent: intent.intent,
                        confidence: intent.confidence,
                        slots: slots.slots,
                    };
                    write_json_line(&mut writer, &prediction)?;
                }
                None => write_json_line(&mut writer, &slots)?,
            }
        }
        writer.flush()?;

        Ok(())
    }
}
