mod commands;
mod logging;
mod models_dir;

use clap::Parser;
use commands::Commands;

/// llvocab: fetch tokenizer models and convert them to JSON vocabularies.
#[derive(clap::Parser, Debug)]
#[command(name = "llvocab")]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
