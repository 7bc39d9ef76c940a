use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use llama_vocab::{VocabMapping, io::read_vocab_json};

use crate::logging::LogArgs;

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Vocabulary JSON file to read; stdin when absent or "-".
    #[arg(long)]
    input: Option<PathBuf>,

    /// Number of entries to print, lowest ids first.
    #[arg(long, default_value = "10")]
    limit: usize,
}

impl InspectArgs {
    /// Run the inspect command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let vocab = read_vocab_json(self.open_input()?)?;

        let mut out = BufWriter::new(std::io::stdout().lock());
        write_summary(&mut out, &vocab, self.limit)?;
        out.flush()?;

        Ok(())
    }

    fn open_input(&self) -> std::io::Result<Box<dyn BufRead>> {
        Ok(match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                log::debug!("reading {}", path.display());
                Box::new(BufReader::new(File::open(path)?))
            }
            _ => Box::new(BufReader::new(std::io::stdin().lock())),
        })
    }
}

/// Print the entry count, the largest id, and the `limit` lowest-id entries.
fn write_summary<W: Write>(
    out: &mut W,
    vocab: &VocabMapping,
    limit: usize,
) -> std::io::Result<()> {
    let pairs = vocab.sorted_pairs();

    writeln!(out, "tokens: {}", vocab.len())?;
    if let Some((_, max_id)) = pairs.last() {
        writeln!(out, "max id: {max_id}")?;
    }
    for (token, id) in pairs.iter().take(limit) {
        writeln!(out, "{id}\t{token:?}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_summary() {
        let vocab: VocabMapping = [(" hello", 42), ("<s>", 1), ("<unk>", 0)]
            .into_iter()
            .collect();

        let mut out = Vec::new();
        write_summary(&mut out, &vocab, 2).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "tokens: 3\nmax id: 42\n0\t\"<unk>\"\n1\t\"<s>\"\n"
        );
    }

    #[test]
    fn test_write_summary_empty() {
        let mut out = Vec::new();
        write_summary(&mut out, &VocabMapping::new(), 10).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "tokens: 0\n");
    }
}
