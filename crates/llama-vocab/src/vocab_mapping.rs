//! # Vocabulary Mapping

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};

/// Integer id of a vocabulary token.
pub type TokenId = u32;

/// The `SentencePiece` leading-space marker, `▁` (U+2581).
pub const SENTENCEPIECE_SPACE_MARKER: char = '\u{2581}';

/// The byte-level BPE leading-space marker, `Ġ` (U+0120).
pub const BYTE_LEVEL_SPACE_MARKER: char = '\u{0120}';

/// A map from token strings to token ids.
///
/// Keys are unique; ordering is irrelevant to equality.
/// Serialization writes entries in ascending id order,
/// so that output files are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct VocabMapping {
    tokens: HashMap<String, TokenId>,
}

impl VocabMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the mapping empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Look up the id of a token.
    pub fn get(
        &self,
        token: &str,
    ) -> Option<TokenId> {
        self.tokens.get(token).copied()
    }

    /// Insert a token, returning the id it previously mapped to.
    pub fn insert<S: Into<String>>(
        &mut self,
        token: S,
        id: TokenId,
    ) -> Option<TokenId> {
        self.tokens.insert(token.into(), id)
    }

    /// Iterate over `(token, id)` pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenId)> {
        self.tokens.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// `(token, id)` pairs sorted by id, then token.
    pub fn sorted_pairs(&self) -> Vec<(&str, TokenId)> {
        let mut pairs: Vec<(&str, TokenId)> = self.iter().collect();
        pairs.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        pairs
    }

    /// Replace every occurrence of each `markers` char in every key with `' '`.
    ///
    /// Keys are rebuilt in ascending id order; when two keys collapse to the
    /// same string, the entry with the larger id wins.
    ///
    /// Returns the number of entries dropped by such collisions.
    pub fn replace_markers(
        &mut self,
        markers: &[char],
    ) -> usize {
        let mut pairs: Vec<(String, TokenId)> = self.tokens.drain().collect();
        pairs.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let mut collisions = 0;
        for (token, id) in pairs {
            let key: String = token
                .chars()
                .map(|c| if markers.contains(&c) { ' ' } else { c })
                .collect();

            if let Some(prev) = self.tokens.insert(key, id) {
                log::debug!("marker substitution: {token:?} ({id}) replaces id {prev}");
                collisions += 1;
            }
        }
        collisions
    }
}

impl Serialize for VocabMapping {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sorted_pairs())
    }
}

impl<S: Into<String>> FromIterator<(S, TokenId)> for VocabMapping {
    fn from_iter<I: IntoIterator<Item = (S, TokenId)>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
