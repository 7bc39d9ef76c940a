use std::path::PathBuf;

use llama_vocab_fetch::{LLAMA_VOCAB_PATH_CONFIG, ModelFetcher, ModelFetcherOptions};

/// Models directory argument group.
#[derive(clap::Args, Debug)]
pub struct ModelsDirArgs {
    /// Models directory; defaults to `$LLAMA_VOCAB_MODELS_DIR`, then `./llama_models`.
    #[arg(long, default_value = None)]
    models_dir: Option<String>,
}

impl ModelsDirArgs {
    /// Resolve the models directory.
    pub fn resolve(&self) -> PathBuf {
        LLAMA_VOCAB_PATH_CONFIG.resolve_models_dir(self.models_dir.as_ref())
    }

    /// Initialize a fetcher over the models directory.
    pub fn init_fetcher(
        &self,
        overwrite: bool,
    ) -> Result<ModelFetcher, Box<dyn std::error::Error>> {
        let options = ModelFetcherOptions::default()
            .with_models_dir(Some(self.resolve()))
            .with_overwrite(overwrite);

        Ok(ModelFetcher::new(options)?)
    }
}
