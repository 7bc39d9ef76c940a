use llama_vocab::{ConvertOptions, SourceFormat, VocabConverter};

use crate::{logging::LogArgs, models_dir::ModelsDirArgs};

/// Input formats for the convert command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// `SentencePiece` `*.model` files.
    Sentencepiece,

    /// `HuggingFace` `*.model.json` files.
    HfJson,
}

impl From<FormatArg> for SourceFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Sentencepiece => SourceFormat::SentencePiece,
            FormatArg::HfJson => SourceFormat::HfTokenizerJson,
        }
    }
}

/// Args for the convert command.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    models_dir: ModelsDirArgs,

    /// Re-convert files whose JSON output already exists.
    #[arg(long)]
    overwrite: bool,

    /// Formats to convert; may be repeated. Defaults to all formats.
    #[arg(long = "format", value_enum)]
    formats: Vec<FormatArg>,
}

impl ConvertArgs {
    /// Run the convert command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;
        run_convert(&self.models_dir, self.overwrite, &self.formats)
    }
}

/// Convert every recognized file in the models directory.
///
/// An empty `formats` selects all formats.
pub fn run_convert(
    models_dir: &ModelsDirArgs,
    overwrite: bool,
    formats: &[FormatArg],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ConvertOptions::default().with_overwrite(overwrite);
    if !formats.is_empty() {
        let formats: Vec<SourceFormat> = formats.iter().map(|&f| f.into()).collect();
        options = options.with_formats(&formats);
    }

    let dir = models_dir.resolve();
    let report = VocabConverter::new(options).convert_dir(&dir)?;

    log::info!(
        "{}: {} converted, {} already present",
        dir.display(),
        report.converted().count(),
        report.skipped().count()
    );
    Ok(())
}
