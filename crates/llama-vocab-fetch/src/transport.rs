//! # Model Transports

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

/// Suffix of the sibling file a download is staged in.
pub const PARTIAL_DOWNLOAD_SUFFIX: &str = ".part";

/// Get the staging path for a download to `path`.
///
/// `llama_models/yi-tokenizer.model` stages in
/// `llama_models/yi-tokenizer.model.part`.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(PARTIAL_DOWNLOAD_SUFFIX);
    PathBuf::from(name)
}

/// Transfers the body of a remote URL to a local file.
pub trait ModelTransport {
    /// Download `url` and write the full response body to `path`.
    ///
    /// On error, `path` is left as it was before the call.
    ///
    /// The parent directory of `path` must already exist.
    fn fetch(
        &mut self,
        url: &str,
        path: &Path,
    ) -> anyhow::Result<()>;
}

/// [`ModelTransport`] over a blocking [`Downloader`] connection pool.
///
/// The body is written to [`partial_path`] and renamed over `path` only
/// after the server answered with a success status; an existing `path`
/// is replaced.
pub struct DownloaderTransport {
    downloader: Downloader,
}

impl DownloaderTransport {
    /// Build a transport which makes a single attempt per URL.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::from_downloader(
            Downloader::builder().retries(1).build()?,
        ))
    }

    /// Wrap an already configured [`Downloader`].
    pub fn from_downloader(downloader: Downloader) -> Self {
        Self { downloader }
    }

    /// Get the downloader.
    pub fn downloader(&self) -> &Downloader {
        &self.downloader
    }

    fn download_to(
        &mut self,
        url: &str,
        path: &Path,
    ) -> anyhow::Result<()> {
        let dl = Download::new(url).file_name(path);

        let results = self
            .downloader
            .download(&[dl])
            .with_context(|| format!("failed to download {url}"))?;

        for result in results {
            result.with_context(|| format!("failed to download {url}"))?;
        }

        Ok(())
    }
}

impl ModelTransport for DownloaderTransport {
    fn fetch(
        &mut self,
        url: &str,
        path: &Path,
    ) -> anyhow::Result<()> {
        let part = partial_path(path);

        // `Downloader` refuses to open an existing file.
        if part.exists() {
            fs::remove_file(&part)
                .with_context(|| format!("failed to remove {}", part.display()))?;
        }

        if let Err(err) = self.download_to(url, &part) {
            if part.exists()
                && let Err(rm) = fs::remove_file(&part)
            {
                log::warn!("failed to remove {}: {rm}", part.display());
            }
            return Err(err);
        }

        fs::rename(&part, path).with_context(|| {
            format!("failed to move {} to {}", part.display(), path.display())
        })?;

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tempdir::TempDir;

    use super::{testing::LocalServer, *};

    #[test]
    fn test_partial_path() {
        assert_eq!(
            partial_path(Path::new("llama_models/yi-tokenizer.model")),
            PathBuf::from("llama_models/yi-tokenizer.model.part")
        );
    }

    #[test]
    #[serial]
    fn test_fetch_success() {
        let server = LocalServer::start("200 OK", b"model bytes");
        let dir = TempDir::new("transport_ok").unwrap();
        let path = dir.path().join("m.model");

        let mut transport = DownloaderTransport::new().unwrap();
        transport.fetch(&server.url("m.model"), &path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"model bytes");
        assert!(!partial_path(&path).exists());
        assert_eq!(server.requests(), 1);
    }

    #[test]
    #[serial]
    fn test_error_status_leaves_no_file() {
        let server = LocalServer::start("500 Internal Server Error", b"oops");
        let dir = TempDir::new("transport_500").unwrap();
        let path = dir.path().join("m.model");

        let mut transport = DownloaderTransport::new().unwrap();
        assert!(transport.fetch(&server.url("m.model"), &path).is_err());

        assert!(!path.exists());
        assert!(!partial_path(&path).exists());

        // A single attempt; no retries.
        assert_eq!(server.requests(), 1);
    }

    #[test]
    #[serial]
    fn test_error_status_keeps_existing_file() {
        let server = LocalServer::start("404 Not Found", b"missing");
        let dir = TempDir::new("transport_404").unwrap();
        let path = dir.path().join("m.model");
        fs::write(&path, b"local copy").unwrap();

        let mut transport = DownloaderTransport::new().unwrap();
        assert!(transport.fetch(&server.url("m.model"), &path).is_err());

        assert_eq!(fs::read(&path).unwrap(), b"local copy");
        assert!(!partial_path(&path).exists());
    }

    #[test]
    #[serial]
    fn test_fetch_replaces_stale_files() {
        let server = LocalServer::start("200 OK", b"fresh");
        let dir = TempDir::new("transport_stale").unwrap();
        let path = dir.path().join("m.model");
        fs::write(&path, b"stale").unwrap();
        fs::write(partial_path(&path), b"half a body").unwrap();

        let mut transport = DownloaderTransport::new().unwrap();
        transport.fetch(&server.url("m.model"), &path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"fresh");
        assert!(!partial_path(&path).exists());
    }
}
