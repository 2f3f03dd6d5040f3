mod decode;
mod encode;
mod tokenize;

/// Subcommands for slotchipper
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode sentences into id rows.
    Encode(encode::EncodeArgs),

    /// Decode tagger / classifier output into predictions.
    Decode(decode::DecodeArgs),

    /// Print the word tokens of each sentence.
    Tokenize(tokenize::TokenizeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Tokenize(cmd) => cmd.run(),
        }
    }
}
