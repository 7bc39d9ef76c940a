//! # Vocabulary IO
//!
//! Loaders for the supported tokenizer file formats,
//! and reading / writing of JSON vocabulary files.
//!
//! ```rust,no_run
//! use llama_vocab::{
//!     SENTENCEPIECE_SPACE_MARKER,
//!     io::{load_sentencepiece_vocab_path, save_vocab_json_path},
//! };
//!
//! fn example() -> llama_vocab::VCResult<()> {
//!     let mut vocab = load_sentencepiece_vocab_path("llama_models/mistral-tokenizer.model")?;
//!     vocab.replace_markers(&[SENTENCEPIECE_SPACE_MARKER]);
//!     save_vocab_json_path(&vocab, "llama_models/mistral-tokenizer.json")
//! }
//! ```

mod hf_tokenizer;
mod json_vocab;
mod sentencepiece;

#[doc(inline)]
pub use hf_tokenizer::*;
#[doc(inline)]
pub use json_vocab::*;
#[doc(inline)]
pub use sentencepiece::*;

#[cfg(test)]
pub(crate) use sentencepiece::testing::encode_test_model;
