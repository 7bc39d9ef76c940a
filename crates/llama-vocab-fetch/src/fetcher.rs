//! # Model Fetcher

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::Downloader;

use crate::{
    LLAMA_VOCAB_PATH_CONFIG,
    model_entries::ModelEntry,
    transport::{DownloaderTransport, ModelTransport},
};

/// Options for [`ModelFetcher`].
#[derive(Clone, Default, Debug)]
pub struct ModelFetcherOptions {
    /// Optional path to the models directory.
    pub models_dir: Option<PathBuf>,

    /// Re-download files which are already present.
    pub overwrite: bool,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,
}

impl ModelFetcherOptions {
    /// Set the models directory.
    pub fn with_models_dir<P: AsRef<Path>>(
        mut self,
        models_dir: Option<P>,
    ) -> Self {
        self.models_dir = models_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the overwrite flag.
    pub fn with_overwrite(
        mut self,
        overwrite: bool,
    ) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }
}

/// What [`ModelFetcher::fetch_entry`] did for a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The file was already present; no request was made.
    Skipped,

    /// The file was downloaded.
    Downloaded,
}

/// A single [`FetchReport`] line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRecord {
    /// The entry.
    pub entry: ModelEntry,

    /// The resolved local path.
    pub path: PathBuf,

    /// The outcome.
    pub outcome: FetchOutcome,
}

/// Per-entry results of [`ModelFetcher::fetch_all`], in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    /// The records.
    pub records: Vec<FetchRecord>,
}

impl FetchReport {
    /// Records for entries which were downloaded.
    pub fn downloaded(&self) -> impl Iterator<Item = &FetchRecord> {
        self.records
            .iter()
            .filter(|r| r.outcome == FetchOutcome::Downloaded)
    }

    /// Records for entries which were skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &FetchRecord> {
        self.records
            .iter()
            .filter(|r| r.outcome == FetchOutcome::Skipped)
    }
}

/// Fetches [`ModelEntry`] files into a models directory.
///
/// Files which already exist are skipped without touching the transport,
/// so re-running a fetch after a successful one performs no downloads.
pub struct ModelFetcher<T: ModelTransport = DownloaderTransport> {
    /// Models directory.
    models_dir: PathBuf,

    /// Re-download existing files.
    overwrite: bool,

    /// Transport used for downloads.
    transport: T,
}

impl ModelFetcher<DownloaderTransport> {
    /// Construct a new [`ModelFetcher`] over a [`Downloader`].
    pub fn new(options: ModelFetcherOptions) -> anyhow::Result<Self> {
        let transport = match options.downloader {
            Some(builder) => DownloaderTransport::from_downloader(builder()),
            None => DownloaderTransport::new().context("failed to build downloader")?,
        };

        Ok(Self::with_transport(options, transport))
    }
}

impl<T: ModelTransport> ModelFetcher<T> {
    /// Construct a new [`ModelFetcher`] over an explicit transport.
    ///
    /// `options.downloader` is ignored.
    pub fn with_transport(
        options: ModelFetcherOptions,
        transport: T,
    ) -> Self {
        let models_dir = LLAMA_VOCAB_PATH_CONFIG.resolve_models_dir(options.models_dir);

        Self {
            models_dir,
            overwrite: options.overwrite,
            transport,
        }
    }

    /// Get the models directory.
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the local path for the given entry.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    pub fn entry_path(
        &self,
        entry: &ModelEntry,
    ) -> PathBuf {
        self.models_dir.join(entry.filename)
    }

    /// Download a single entry, unless it is already present.
    ///
    /// # Errors
    /// * Returns an error if the models directory cannot be created.
    /// * Returns any transport error.
    pub fn fetch_entry(
        &mut self,
        entry: &ModelEntry,
    ) -> anyhow::Result<FetchOutcome> {
        let path = self.entry_path(entry);

        if path.exists() && !self.overwrite {
            log::info!("File {} already exists.", entry.filename);
            return Ok(FetchOutcome::Skipped);
        }

        log::info!("Downloading {} from {}...", entry.filename, entry.url);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        self.transport.fetch(entry.url, &path)?;

        Ok(FetchOutcome::Downloaded)
    }

    /// Fetch every entry, in order.
    ///
    /// The first error aborts the run; later entries are not attempted.
    pub fn fetch_all(
        &mut self,
        entries: &[ModelEntry],
    ) -> anyhow::Result<FetchReport> {
        let mut report = FetchReport::default();

        for entry in entries {
            let outcome = self.fetch_entry(entry)?;
            report.records.push(FetchRecord {
                entry: *entry,
                path: self.entry_path(entry),
                outcome,
            });
        }

        Ok(report)
    }
}
