use std::io::{BufRead, Write};

use slotchipper::language::WordTokenizer;

use crate::{
    config_args::ConfigArgs,
    input_output::{InputArgs, OutputArgs, write_json_line},
    logging::LogArgs,
};

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    config: ConfigArgs,

    /// Also print each word's bigrams.
    #[arg(long)]
    bigrams: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TokenizeArgs {
    /// Run the tokenize command.
    ///
    /// Writes one JSON array of word tokens per input line.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.config.load_options()?.language.tokenizer();

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            let words = tokenizer.split_to_words(&line?);
            if self.bigrams {
                let bigrams: Vec<Vec<String>> = words
                    .iter()
                    .map(|w| tokenizer.split_word_to_bigrams(w))
                    .collect();
                write_json_line(&mut writer, &(words, bigrams))?;
            } else {
                write_json_line(&mut writer, &words)?;
            }
            writer.flush()?;
        }

        Ok(())
    }
}
