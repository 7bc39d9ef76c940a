use llama_vocab_fetch::MODEL_ENTRIES;

use crate::{logging::LogArgs, models_dir::ModelsDirArgs};

/// Args for the fetch command.
#[derive(clap::Args, Debug)]
pub struct FetchArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    models_dir: ModelsDirArgs,

    /// Re-download files which are already present.
    #[arg(long)]
    overwrite: bool,
}

impl FetchArgs {
    /// Run the fetch command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;
        run_fetch(&self.models_dir, self.overwrite)
    }
}

/// Fetch every [`MODEL_ENTRIES`] file into the models directory.
pub fn run_fetch(
    models_dir: &ModelsDirArgs,
    overwrite: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut fetcher = models_dir.init_fetcher(overwrite)?;
    log::debug!("models dir: {}", fetcher.models_dir().display());

    let report = fetcher.fetch_all(MODEL_ENTRIES)?;

    log::info!(
        "{} downloaded, {} already present",
        report.downloaded().count(),
        report.skipped().count()
    );
    Ok(())
}
