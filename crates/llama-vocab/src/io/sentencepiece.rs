//! # `SentencePiece` Model IO
//!
//! A `SentencePiece` `tokenizer.model` file is a serialized `ModelProto`
//! protobuf. Only the `pieces` field is decoded; every other field
//! (trainer / normalizer specs, ...) is skipped on the wire.
//!
//! The id of a piece is its index in `pieces`.

use std::{fs, path::Path};

use prost::Message;

use crate::{
    errors::{VCResult, VocabError},
    vocab_mapping::{TokenId, VocabMapping},
};

/// The subset of `sentencepiece.ModelProto` needed to recover the vocabulary.
#[derive(Clone, PartialEq, Message)]
pub struct ModelProto {
    /// Vocabulary pieces, in id order.
    #[prost(message, repeated, tag = "1")]
    pub pieces: Vec<SentencePiece>,
}

/// `sentencepiece.ModelProto.SentencePiece`.
#[derive(Clone, PartialEq, Message)]
pub struct SentencePiece {
    /// The piece text.
    #[prost(string, optional, tag = "1")]
    pub piece: Option<String>,

    /// The piece score.
    #[prost(float, optional, tag = "2")]
    pub score: Option<f32>,

    /// The raw piece type; see [`PieceType`].
    #[prost(int32, optional, tag = "3")]
    pub kind: Option<i32>,
}

/// `sentencepiece.ModelProto.SentencePiece.Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    /// A normal symbol.
    Normal,

    /// The unknown symbol.
    Unknown,

    /// A control symbol (`<s>`, `</s>`, ...).
    Control,

    /// A user defined symbol.
    UserDefined,

    /// A byte-fallback symbol (`<0x0A>`, ...).
    Byte,

    /// An unused symbol.
    Unused,
}

impl SentencePiece {
    /// The decoded piece type.
    ///
    /// Absent and unrecognized values decode as [`PieceType::Normal`],
    /// the proto default.
    pub fn piece_type(&self) -> PieceType {
        match self.kind {
            Some(2) => PieceType::Unknown,
            Some(3) => PieceType::Control,
            Some(4) => PieceType::UserDefined,
            Some(5) => PieceType::Unused,
            Some(6) => PieceType::Byte,
            _ => PieceType::Normal,
        }
    }
}

/// Decode a [`ModelProto`] from raw bytes.
pub fn decode_sentencepiece_model(bytes: &[u8]) -> VCResult<ModelProto> {
    Ok(ModelProto::decode(bytes)?)
}

/// Build the `{piece: id}` [`VocabMapping`] for a [`ModelProto`].
///
/// No marker substitution is applied.
///
/// # Errors
/// * Returns [`VocabError::Format`] if the model has no pieces,
///   or a piece has no text.
pub fn sentencepiece_vocab(model: &ModelProto) -> VCResult<VocabMapping> {
    if model.pieces.is_empty() {
        return Err(VocabError::Format(
            "sentencepiece model has no pieces".to_string(),
        ));
    }

    let mut vocab = VocabMapping::new();
    for (idx, sp) in model.pieces.iter().enumerate() {
        let id = TokenId::try_from(idx)
            .map_err(|_| VocabError::Format(format!("piece index {idx} out of range")))?;

        let piece = sp
            .piece
            .as_deref()
            .ok_or_else(|| VocabError::Format(format!("piece {id} has no text")))?;

        vocab.insert(piece, id);
    }

    log::debug!(
        "sentencepiece model: {} pieces ({} byte, {} control)",
        model.pieces.len(),
        model
            .pieces
            .iter()
            .filter(|p| p.piece_type() == PieceType::Byte)
            .count(),
        model
            .pieces
            .iter()
            .filter(|p| p.piece_type() == PieceType::Control)
            .count(),
    );

    Ok(vocab)
}

/// Load the [`VocabMapping`] of a `SentencePiece` `.model` file.
pub fn load_sentencepiece_vocab_path<P: AsRef<Path>>(path: P) -> VCResult<VocabMapping> {
    let bytes = fs::read(path)?;
    sentencepiece_vocab(&decode_sentencepiece_model(&bytes)?)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Encode a `ModelProto` with the given pieces, as a trained model would.
    pub fn encode_test_model(pieces: &[(&str, i32)]) -> Vec<u8> {
        ModelProto {
            pieces: pieces
                .iter()
                .enumerate()
                .map(|(i, (piece, kind))| SentencePiece {
                    piece: Some(piece.to_string()),
                    score: Some(-(i as f32)),
                    kind: Some(*kind),
                })
                .collect(),
        }
        .encode_to_vec()
    }
}
