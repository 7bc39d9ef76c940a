//! # `llama-vocab` Tokenizer Vocabulary Converter
//!
//! Converts tokenizer definitions into flat `{token: id}` JSON vocabularies,
//! with leading-space marker characters (`▁`, `Ġ`) replaced by `' '`.
//!
//! Supported inputs:
//! * `SentencePiece` `*.model` protobufs; see [`io::load_sentencepiece_vocab_path`].
//! * `HuggingFace` `*.model.json` (`tokenizer.json`) files;
//!   see [`io::load_hf_tokenizer_vocab_path`].
//!
//! See [`converter::VocabConverter`] to convert a whole models directory.
//!
//! ```rust,no_run
//! use llama_vocab::{ConvertOptions, VocabConverter};
//!
//! fn example() -> llama_vocab::VCResult<()> {
//!     let converter = VocabConverter::new(ConvertOptions::default());
//!     let report = converter.convert_dir("llama_models")?;
//!     for record in report.converted() {
//!         println!("{}", record.output.display());
//!     }
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod converter;
pub mod errors;
pub mod io;
pub mod vocab_mapping;

pub use converter::{
    ConvertOptions,
    ConvertOutcome,
    ConvertRecord,
    ConvertReport,
    SourceFormat,
    VocabConverter,
};
pub use errors::{VCResult, VocabError};
pub use vocab_mapping::{
    BYTE_LEVEL_SPACE_MARKER,
    SENTENCEPIECE_SPACE_MARKER,
    TokenId,
    VocabMapping,
};
