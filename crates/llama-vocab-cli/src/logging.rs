use log::LevelFilter;
use stderrlog::Timestamp;

/// Crates whose records are shown unless `--log-deps` is given.
const LOG_MODULES: &[&str] = &["llvocab", "llama_vocab", "llama_vocab_fetch"];

/// Logging setup arg group.
///
/// Progress lines ("Downloading ...", "Converting ...") are logged at
/// info, which is the default level.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Only report errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// More detail; -v for debug, -vv for trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(long)]
    pub ts: bool,

    /// Also show records from dependencies, such as the HTTP client.
    #[arg(long)]
    pub log_deps: bool,
}

impl LogArgs {
    /// The level selected by `--quiet` / `--verbose`.
    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Initialize the global logger.
    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut logger = stderrlog::new();
        logger.verbosity(self.level()).timestamp(if self.ts {
            Timestamp::Second
        } else {
            Timestamp::Off
        });
        if !self.log_deps {
            logger.modules(LOG_MODULES.iter().copied());
        }
        logger.init()?;

        Ok(())
    }
}
