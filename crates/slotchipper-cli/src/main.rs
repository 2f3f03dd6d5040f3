mod commands;
mod config_args;
mod dictionary_args;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

/// slotchipper: intent / slot pipeline encoding and decoding.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
