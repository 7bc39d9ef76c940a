//! # JSON Vocabulary IO

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{errors::VCResult, vocab_mapping::VocabMapping};

/// Indentation used for written vocabulary files.
pub const VOCAB_JSON_INDENT: &[u8] = b"    ";

/// Suffix of the sibling file a vocabulary is written to before it is
/// renamed into place.
pub const VOCAB_JSON_STAGING_SUFFIX: &str = ".part";

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(VOCAB_JSON_STAGING_SUFFIX);
    PathBuf::from(name)
}

/// Write a [`VocabMapping`] as a pretty-printed JSON object.
///
/// * Indented by [`VOCAB_JSON_INDENT`].
/// * Non-ASCII characters are written literally, not `\u` escaped.
/// * Entries are in ascending id order.
/// * No trailing newline.
pub fn write_vocab_json<W: Write>(
    vocab: &VocabMapping,
    writer: W,
) -> VCResult<()> {
    let formatter = PrettyFormatter::with_indent(VOCAB_JSON_INDENT);
    let mut ser = Serializer::with_formatter(writer, formatter);
    vocab.serialize(&mut ser)?;
    Ok(())
}

/// Save a [`VocabMapping`] to a JSON file; see [`write_vocab_json`].
///
/// The file only appears at `path` once it has been completely written;
/// on error, `path` is left as it was.
pub fn save_vocab_json_path<P: AsRef<Path>>(
    vocab: &VocabMapping,
    path: P,
) -> VCResult<()> {
    let path = path.as_ref();
    let staging = staging_path(path);

    let result = write_vocab_json_file(vocab, &staging).and_then(|()| {
        fs::rename(&staging, path)?;
        Ok(())
    });

    if result.is_err()
        && staging.exists()
        && let Err(err) = fs::remove_file(&staging)
    {
        log::warn!("failed to remove {}: {err}", staging.display());
    }

    result
}

fn write_vocab_json_file(
    vocab: &VocabMapping,
    path: &Path,
) -> VCResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab_json(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a [`VocabMapping`] from a JSON object reader.
pub fn read_vocab_json<R: BufRead>(reader: R) -> VCResult<VocabMapping> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a [`VocabMapping`] from a JSON file.
pub fn load_vocab_json_path<P: AsRef<Path>>(path: P) -> VCResult<VocabMapping> {
    read_vocab_json(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_format() {
        let vocab: VocabMapping = [("<unk>", 0), (" hello", 42), ("\u{4f60}\u{597d}", 7)]
            .into_iter()
            .collect();

        let mut buf: Vec<u8> = vec![];
        write_vocab_json(&vocab, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "{\n    \"<unk>\": 0,\n    \"\u{4f60}\u{597d}\": 7,\n    \" hello\": 42\n}"
        );
    }

    #[test]
    fn test_write_empty() {
        let mut buf: Vec<u8> = vec![];
        write_vocab_json(&VocabMapping::new(), &mut buf).unwrap();
        assert_eq!(buf, b"{}");
    }

    #[test]
    fn test_save_load_vocab_json() {
        let vocab: VocabMapping = [(" hello", 42), ("<s>", 1), ("\u{1f600}", 300)]
            .into_iter()
            .collect();

        tempdir::TempDir::new("vocab_json")
            .and_then(|dir| {
                let path = dir.path().join("vocab.json");

                save_vocab_json_path(&vocab, &path).expect("Failed to save vocab");
                let loaded = load_vocab_json_path(&path).expect("Failed to load vocab");

                assert_eq!(&loaded, &vocab);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_read_rejects_non_object() {
        assert!(read_vocab_json("[1, 2, 3]".as_bytes()).is_err());
        assert!(read_vocab_json(r#"{"a": -1}"#.as_bytes()).is_err());
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempdir::TempDir::new("vocab_json_replace").unwrap();
        let path = dir.path().join("vocab.json");
        std::fs::write(&path, "{\"old\": 1}").unwrap();

        let vocab: VocabMapping = [("new", 2)].into_iter().collect();
        save_vocab_json_path(&vocab, &path).unwrap();

        assert_eq!(load_vocab_json_path(&path).unwrap(), vocab);
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_failed_save_leaves_nothing_behind() {
        let dir = tempdir::TempDir::new("vocab_json_failed").unwrap();

        // A directory in the way of the final rename.
        let path = dir.path().join("vocab.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"x").unwrap();

        let vocab: VocabMapping = [("a", 0)].into_iter().collect();
        assert!(save_vocab_json_path(&vocab, &path).is_err());

        assert!(path.is_dir());
        assert!(!staging_path(&path).exists());
    }
}
