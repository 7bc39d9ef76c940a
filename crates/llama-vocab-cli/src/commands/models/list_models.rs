use llama_vocab::SourceFormat;
use llama_vocab_fetch::MODEL_ENTRIES;

use crate::models_dir::ModelsDirArgs;

/// Args for the model listing command.
#[derive(clap::Args, Debug)]
pub struct ListModelsArgs {
    #[command(flatten)]
    models_dir: ModelsDirArgs,
}

impl ListModelsArgs {
    /// Run the model listing command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = self.models_dir.resolve();

        for entry in MODEL_ENTRIES {
            let fetched = dir.join(entry.filename).exists();
            let converted = SourceFormat::detect(entry.filename, SourceFormat::ALL)
                .and_then(|f| f.output_name(entry.filename))
                .is_some_and(|name| dir.join(name).exists());

            println!(
                "[{}{}] \"{}\" - {}",
                if fetched { "f" } else { "-" },
                if converted { "c" } else { "-" },
                entry.filename,
                entry.description
            );
            println!("    {}", entry.url);
        }

        Ok(())
    }
}
