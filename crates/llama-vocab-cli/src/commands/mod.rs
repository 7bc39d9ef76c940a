mod convert;
mod fetch;
mod inspect;
mod models;
mod sync;

/// Subcommands for llvocab
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Download any missing tokenizer model files.
    Fetch(fetch::FetchArgs),

    /// Convert tokenizer model files to JSON vocabularies.
    Convert(convert::ConvertArgs),

    /// Fetch, then convert.
    Sync(sync::SyncArgs),

    /// Summarize a JSON vocabulary.
    Inspect(inspect::InspectArgs),

    /// Models sub-menu.
    Models(models::ModelsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Fetch(cmd) => cmd.run(),
            Commands::Convert(cmd) => cmd.run(),
            Commands::Sync(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Models(cmd) => cmd.run(),
        }
    }
}
