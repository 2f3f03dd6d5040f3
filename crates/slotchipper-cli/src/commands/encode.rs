use std::io::Write;

use slotchipper::{
    encoders::{LexicalEncoder, SentenceEncoder},
    rayon::ParallelRayonEncoder,
};

use crate::{
    config_args::ConfigArgs,
    dictionary_args::DictionaryArgs,
    input_output::{InputArgs, OutputArgs, write_json_line},
    logging::LogArgs,
};

/// Which lexical units to encode.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum EncodeMode {
    /// Whole words, with bigram / character fallback.
    Words,

    /// Per-word characters.
    Characters,
}

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// Encoding mode.
    #[arg(long, default_value = "words")]
    mode: EncodeMode,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    ///
    /// Writes one JSON line per sentence: ``max_words`` rows of ``max_ngrams`` ids.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = self.config.load_options()?;
        let tokenizer = options.language.tokenizer();
        let dictionary = self.dictionary.load_dictionary(&tokenizer)?;
        let encoder = ParallelRayonEncoder::new(LexicalEncoder::new(
            dictionary,
            tokenizer,
            options.encoder,
        )?);

        let sentences = self.input.read_lines()?;
        let mut writer = self.output.open_writer()?;

        let batches = slotchipper::batching::chunk(&sentences, options.batch_size)?;
        let total = batches.len();
        for (idx, batch) in batches.into_iter().enumerate() {
            log::info!("batch {} of {total}: {} sentences", idx + 1, batch.len());
            let buffer = match self.mode {
                EncodeMode::Words => encoder.encode_words(batch),
                EncodeMode::Characters => encoder.encode_characters(batch),
            };
            for sentence in buffer.to_nested() {
                write_json_line(&mut writer, &sentence)?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}
