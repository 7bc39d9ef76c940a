//! # Remote Model Entries

/// A tokenizer model file and the URL it is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelEntry {
    /// The local file name, relative to the models directory.
    pub filename: &'static str,

    /// The URL the file is downloaded from.
    pub url: &'static str,

    /// Short description of the model family.
    pub description: &'static str,
}

impl ModelEntry {
    /// Create a new [`ModelEntry`].
    pub const fn new(
        filename: &'static str,
        url: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            filename,
            url,
            description,
        }
    }
}

/// The fixed list of tokenizer models to fetch.
///
/// `*.model` entries are `SentencePiece` protobufs;
/// `*.model.json` entries are `HuggingFace` `tokenizer.json` files.
pub const MODEL_ENTRIES: &[ModelEntry] = &[
    ModelEntry::new(
        "chatglm3-tokenizer.model",
        "https://huggingface.co/THUDM/chatglm3-6b/resolve/main/tokenizer.model?download=true",
        "ChatGLM3",
    ),
    ModelEntry::new(
        "baichuan2-tokenizer.model",
        "https://huggingface.co/baichuan-inc/Baichuan2-13B-Chat/resolve/main/tokenizer.model?download=true",
        "Baichuan2",
    ),
    ModelEntry::new(
        "mistral-tokenizer.model",
        "https://huggingface.co/mistralai/Mistral-7B-Instruct-v0.2/resolve/main/tokenizer.model?download=true",
        "Mistral (llama2 / zephyr)",
    ),
    ModelEntry::new(
        "internlm2-tokenizer.model",
        "https://huggingface.co/internlm/internlm2-chat-20b/resolve/main/tokenizer.model?download=true",
        "InternLM2",
    ),
    ModelEntry::new(
        "yi-tokenizer.model",
        "https://huggingface.co/01-ai/Yi-34B-Chat/resolve/main/tokenizer.model?download=true",
        "Yi 34B",
    ),
    ModelEntry::new(
        "neox-tokenizer.model.json",
        "https://huggingface.co/mosaicml/mpt-7b/raw/main/tokenizer.json",
        "GPT-NeoX (mpt / rwkv)",
    ),
    ModelEntry::new(
        "falcon-tokenizer.model.json",
        "https://huggingface.co/tiiuae/falcon-7b/raw/main/tokenizer.json",
        "Falcon",
    ),
    ModelEntry::new(
        "gemma-tokenizer.model.json",
        "https://huggingface.co/google/gemma-7b/resolve/main/tokenizer.json?download=true",
        "Gemma 7B",
    ),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_entries_are_unique() {
        let names: HashSet<&str> = MODEL_ENTRIES.iter().map(|e| e.filename).collect();
        assert_eq!(names.len(), MODEL_ENTRIES.len());
    }

    #[test]
    fn test_entries_are_flat_https() {
        for entry in MODEL_ENTRIES {
            assert!(entry.url.starts_with("https://"), "{entry:?}");
            assert!(!entry.filename.contains('/'), "{entry:?}");
            assert!(
                entry.filename.ends_with(".model") || entry.filename.ends_with(".model.json"),
                "{entry:?}"
            );
        }
    }
}
