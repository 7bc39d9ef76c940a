//! # Error Types

use std::path::{Path, PathBuf};

/// Errors from llama-vocab operations.
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// `SentencePiece` protobuf decode error.
    #[error("protobuf decode error: {0}")]
    Protobuf(#[from] prost::DecodeError),

    /// The tokenizer file decoded, but its contents are unusable.
    #[error("{0}")]
    Format(String),

    /// An error while processing a specific file.
    #[error("{}: {source}", .path.display())]
    InFile {
        /// The file being processed.
        path: PathBuf,

        /// The underlying error.
        source: Box<VocabError>,
    },
}

impl VocabError {
    /// Attach the path of the file being processed.
    pub fn in_file<P: AsRef<Path>>(
        path: P,
        source: VocabError,
    ) -> Self {
        VocabError::InFile {
            path: path.as_ref().to_path_buf(),
            source: Box::new(source),
        }
    }
}

/// Result type for llama-vocab operations.
pub type VCResult<T> = core::result::Result<T, VocabError>;
