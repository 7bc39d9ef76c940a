//! # `HuggingFace` `tokenizer.json` IO
//!
//! Only `model.vocab` is read. It is either a `{token: id}` object
//! (BPE / `WordPiece` / `WordLevel` models), or a `[[token, score], ...]`
//! array (Unigram models) where the id is the array index.
//! Added tokens are not included.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use serde::Deserialize;

use crate::{
    errors::{VCResult, VocabError},
    vocab_mapping::{TokenId, VocabMapping},
};

#[derive(Deserialize)]
struct TokenizerJson {
    model: TokenizerModel,
}

#[derive(Deserialize)]
struct TokenizerModel {
    #[serde(default)]
    vocab: Option<ModelVocab>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ModelVocab {
    Map(HashMap<String, TokenId>),
    Scored(Vec<(String, f64)>),
}

/// Read the [`VocabMapping`] of a `tokenizer.json` document.
///
/// No marker substitution is applied.
///
/// # Errors
/// * Returns [`VocabError::Json`] if the document does not parse,
///   or has no `model` object.
/// * Returns [`VocabError::Format`] if `model.vocab` is missing.
pub fn read_hf_tokenizer_vocab<R: BufRead>(reader: R) -> VCResult<VocabMapping> {
    let doc: TokenizerJson = serde_json::from_reader(reader)?;

    match doc.model.vocab {
        Some(ModelVocab::Map(map)) => Ok(map.into_iter().collect()),
        Some(ModelVocab::Scored(pieces)) => pieces
            .into_iter()
            .enumerate()
            .map(|(idx, (token, _score))| {
                TokenId::try_from(idx)
                    .map(|id| (token, id))
                    .map_err(|_| VocabError::Format(format!("vocab index {idx} out of range")))
            })
            .collect(),
        None => Err(VocabError::Format(
            "tokenizer.json has no model.vocab".to_string(),
        )),
    }
}

/// Load the [`VocabMapping`] of a `tokenizer.json` file.
pub fn load_hf_tokenizer_vocab_path<P: AsRef<Path>>(path: P) -> VCResult<VocabMapping> {
    read_hf_tokenizer_vocab(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bpe_vocab() {
        let doc = r#"{
            "version": "1.0",
            "added_tokens": [{"id": 0, "content": "<|endoftext|>"}],
            "model": {
                "type": "BPE",
                "vocab": {"<|endoftext|>": 0, "Ġthe": 1, "a": 2},
                "merges": ["Ġ t", "Ġt he"]
            }
        }"#;

        let vocab = read_hf_tokenizer_vocab(doc.as_bytes()).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get("\u{0120}the"), Some(1));
        assert_eq!(vocab.get("a"), Some(2));
    }

    #[test]
    fn test_unigram_vocab() {
        let doc = r#"{
            "model": {
                "type": "Unigram",
                "unk_id": 0,
                "vocab": [["<unk>", 0.0], ["▁hello", -3.5], ["x", -9.25]]
            }
        }"#;

        let vocab = read_hf_tokenizer_vocab(doc.as_bytes()).unwrap();
        assert_eq!(vocab.sorted_pairs(), vec![
            ("<unk>", 0),
            ("\u{2581}hello", 1),
            ("x", 2)
        ]);
    }

    #[test]
    fn test_missing_vocab() {
        let err = read_hf_tokenizer_vocab(r#"{"model": {"type": "BPE"}}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, VocabError::Format(_)));

        let err = read_hf_tokenizer_vocab(r#"{"version": "1.0"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, VocabError::Json(_)));
    }
}
