use super::{convert::run_convert, fetch::run_fetch};
use crate::{logging::LogArgs, models_dir::ModelsDirArgs};

/// Args for the sync command.
#[derive(clap::Args, Debug)]
pub struct SyncArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    models_dir: ModelsDirArgs,

    /// Re-download and re-convert everything.
    #[arg(long)]
    overwrite: bool,
}

impl SyncArgs {
    /// Run the sync command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        run_fetch(&self.models_dir, self.overwrite)?;
        run_convert(&self.models_dir, self.overwrite, &[])
    }
}
