//! # Vocabulary Converter
//!
//! Scans a models directory for tokenizer files and writes a JSON
//! vocabulary next to each one.
//!
//! | input                       | output                 |
//! | --------------------------- | ---------------------- |
//! | `mistral-tokenizer.model`   | `mistral-tokenizer.json` |
//! | `neox-tokenizer.model.json` | `neox-tokenizer.json`  |

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::{VCResult, VocabError},
    io::{load_hf_tokenizer_vocab_path, load_sentencepiece_vocab_path, save_vocab_json_path},
    vocab_mapping::{BYTE_LEVEL_SPACE_MARKER, SENTENCEPIECE_SPACE_MARKER, VocabMapping},
};

/// Extension given to converted vocabulary files.
pub const VOCAB_JSON_EXTENSION: &str = ".json";

/// A tokenizer file format the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// `SentencePiece` `ModelProto` files; `*.model`.
    SentencePiece,

    /// `HuggingFace` `tokenizer.json` files; `*.model.json`.
    HfTokenizerJson,
}

impl SourceFormat {
    /// All known formats.
    pub const ALL: &'static [SourceFormat] =
        &[SourceFormat::SentencePiece, SourceFormat::HfTokenizerJson];

    /// The file name suffix selecting this format.
    pub fn suffix(&self) -> &'static str {
        match self {
            SourceFormat::SentencePiece => ".model",
            SourceFormat::HfTokenizerJson => ".model.json",
        }
    }

    /// The leading-space marker chars replaced by `' '` in keys.
    pub fn markers(&self) -> &'static [char] {
        match self {
            SourceFormat::SentencePiece => &[SENTENCEPIECE_SPACE_MARKER],
            SourceFormat::HfTokenizerJson => &[BYTE_LEVEL_SPACE_MARKER, SENTENCEPIECE_SPACE_MARKER],
        }
    }

    /// The output file name for `file_name`, if it has this format's suffix.
    pub fn output_name(
        &self,
        file_name: &str,
    ) -> Option<String> {
        file_name
            .strip_suffix(self.suffix())
            .map(|stem| format!("{stem}{VOCAB_JSON_EXTENSION}"))
    }

    /// Load the raw (unsubstituted) vocabulary of a file in this format.
    pub fn load_vocab_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> VCResult<VocabMapping> {
        match self {
            SourceFormat::SentencePiece => load_sentencepiece_vocab_path(path),
            SourceFormat::HfTokenizerJson => load_hf_tokenizer_vocab_path(path),
        }
    }

    /// Find the first of `formats` whose suffix `file_name` has.
    pub fn detect(
        file_name: &str,
        formats: &[SourceFormat],
    ) -> Option<SourceFormat> {
        formats
            .iter()
            .copied()
            .find(|f| file_name.ends_with(f.suffix()))
    }
}

/// Options for [`VocabConverter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Formats to convert; other files are ignored.
    pub formats: Vec<SourceFormat>,

    /// Re-convert files whose output already exists.
    pub overwrite: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            formats: SourceFormat::ALL.to_vec(),
            overwrite: false,
        }
    }
}

impl ConvertOptions {
    /// Set the formats.
    pub fn with_formats(
        mut self,
        formats: &[SourceFormat],
    ) -> Self {
        self.formats = formats.to_vec();
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
}

/// What the converter did for a single input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// The output already existed; the input was not read.
    Skipped,

    /// The output was written, with this many entries.
    Converted {
        /// Entries written.
        tokens: usize,
    },
}

/// A single [`ConvertReport`] line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRecord {
    /// The input file.
    pub input: PathBuf,

    /// The output file.
    pub output: PathBuf,

    /// The input format.
    pub format: SourceFormat,

    /// The outcome.
    pub outcome: ConvertOutcome,
}

/// Per-file results of [`VocabConverter::convert_dir`], in file name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertReport {
    /// The records.
    pub records: Vec<ConvertRecord>,
}

impl ConvertReport {
    /// Records for files which were converted.
    pub fn converted(&self) -> impl Iterator<Item = &ConvertRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, ConvertOutcome::Converted { .. }))
    }

    /// Records for files which were skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &ConvertRecord> {
        self.records
            .iter()
            .filter(|r| r.outcome == ConvertOutcome::Skipped)
    }
}

/// Converts tokenizer files into JSON vocabularies.
#[derive(Debug, Clone, Default)]
pub struct VocabConverter {
    options: ConvertOptions,
}

impl VocabConverter {
    /// Construct a new [`VocabConverter`].
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Load `input`, replace markers, and write the JSON vocabulary to `output`.
    ///
    /// Does not check whether `output` exists.
    ///
    /// Returns the number of entries written.
    pub fn convert_file<I, O>(
        &self,
        input: I,
        output: O,
        format: SourceFormat,
    ) -> VCResult<usize>
    where
        I: AsRef<Path>,
        O: AsRef<Path>,
    {
        let input = input.as_ref();
        let output = output.as_ref();

        let mut vocab = format
            .load_vocab_path(input)
            .map_err(|e| VocabError::in_file(input, e))?;

        let collisions = vocab.replace_markers(format.markers());
        if collisions > 0 {
            log::warn!(
                "{}: {collisions} tokens collided after marker substitution",
                input.display()
            );
        }

        save_vocab_json_path(&vocab, output).map_err(|e| VocabError::in_file(output, e))?;

        Ok(vocab.len())
    }

    /// Convert every recognized file directly inside `dir`.
    ///
    /// Files are visited in file name order. Files whose output already
    /// exists are skipped without being read, unless `overwrite` is set.
    /// The first failure aborts the run.
    ///
    /// Fails before converting anything if two inputs map to the same
    /// output name (`x.model` and `x.model.json`).
    pub fn convert_dir<P: AsRef<Path>>(
        &self,
        dir: P,
    ) -> VCResult<ConvertReport> {
        let dir = dir.as_ref();

        let mut names: Vec<String> = vec![];
        for entry in fs::read_dir(dir).map_err(|e| VocabError::in_file(dir, e.into()))? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => log::debug!("ignoring non-utf8 file name {name:?}"),
            }
        }
        names.sort();

        // No two inputs may claim the same output.
        let mut planned: Vec<(String, SourceFormat, String)> = vec![];
        let mut claimed: HashMap<String, String> = HashMap::new();
        for name in names {
            let Some(format) = SourceFormat::detect(&name, &self.options.formats) else {
                continue;
            };
            let Some(output_name) = format.output_name(&name) else {
                continue;
            };

            if let Some(first) = claimed.get(&output_name) {
                return Err(VocabError::in_file(
                    dir,
                    VocabError::Format(format!(
                        "{first} and {name} both convert to {output_name}"
                    )),
                ));
            }
            claimed.insert(output_name.clone(), name.clone());
            planned.push((name, format, output_name));
        }

        let mut report = ConvertReport::default();
        for (name, format, output_name) in planned {
            let input = dir.join(&name);
            let output = dir.join(&output_name);

            let outcome = if output.exists() && !self.options.overwrite {
                log::info!("{name} already exists, skipping...");
                ConvertOutcome::Skipped
            } else {
                log::info!("Converting {name} to json...");
                let tokens = self.convert_file(&input, &output, format)?;
                log::info!("Done converting {name} to json.");
                ConvertOutcome::Converted { tokens }
            };

            report.records.push(ConvertRecord {
                input,
                output,
                format,
                outcome,
            });
        }

        Ok(report)
    }
}
