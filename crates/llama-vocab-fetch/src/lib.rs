//! # llama-vocab-fetch
//!
//! Downloads tokenizer model files into a local models directory.
//!
//! Every [`ModelEntry`] maps a local file name to a remote URL; files that
//! are already present are never re-requested.
//!
//! ```rust,no_run
//! use llama_vocab_fetch::{MODEL_ENTRIES, ModelFetcher, ModelFetcherOptions};
//!
//! fn example() -> anyhow::Result<()> {
//!     let mut fetcher = ModelFetcher::new(ModelFetcherOptions::default())?;
//!     let report = fetcher.fetch_all(MODEL_ENTRIES)?;
//!     println!("downloaded {} files", report.downloaded().count());
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod fetcher;
pub mod model_entries;
pub mod path_resolver;
pub mod transport;

pub use fetcher::{FetchOutcome, FetchRecord, FetchReport, ModelFetcher, ModelFetcherOptions};
pub use model_entries::{MODEL_ENTRIES, ModelEntry};
pub use transport::{DownloaderTransport, ModelTransport};

/// Environment variable key to override the default models directory.
pub const LLAMA_VOCAB_MODELS_DIR: &str = "LLAMA_VOCAB_MODELS_DIR";

/// Default models directory, relative to the working directory.
pub const DEFAULT_MODELS_DIR: &str = "llama_models";

/// Default [`PathResolver`] for llama-vocab.
pub const LLAMA_VOCAB_PATH_CONFIG: PathResolver = PathResolver {
    models_env_vars: &[LLAMA_VOCAB_MODELS_DIR],
    default_models_dir: DEFAULT_MODELS_DIR,
};
