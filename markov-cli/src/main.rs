use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use markov_core::io::{open_input, write_words};
use markov_core::model::config::GenerationConfig;
use markov_core::model::state_table::StateTable;
use markov_core::{MarkovError, Result};

/// Generate random text that mimics a corpus, one word per line.
#[derive(Parser, Debug)]
#[command(name = "markov", version)]
struct Args {
    /// Corpus file to learn from (reads standard input when absent or "-")
    input: Option<PathBuf>,

    /// JSON file with `max_words` and `seed`; command-line values take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of words to generate [default: 10000]
    #[arg(short = 'n', long)]
    max_words: Option<usize>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a JSON summary of the learned table on stderr
    #[arg(long)]
    stats: bool,
}

impl Args {
    /// Merges the optional config file with the command-line overrides.
    fn generation_config(&self) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_json_file(path)?,
            None => GenerationConfig::default(),
        };
        if let Some(max_words) = self.max_words {
            config.max_words = max_words;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// Writes the generated words, one per line.
///
/// A closed pipe (e.g. `| head`) is a normal way to stop reading and is not
/// reported as an error.
fn emit<'a, W, I>(writer: W, words: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    match write_words(writer, words) {
        Ok(n) => Ok(n),
        Err(e) => {
            let err = MarkovError::io("Failed to write output", e);
            if err.is_broken_pipe() {
                debug!("Output closed early");
                Ok(0)
            } else {
                Err(err)
            }
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.generation_config()?;

    // Build phase: the whole corpus is consumed before generating
    let table: StateTable = StateTable::from_reader(open_input(args.input.as_ref())?)?;
    let stats = table.stats();
    info!(
        "Learned {} prefixes, {} suffixes, {} distinct words",
        stats.prefixes, stats.suffixes, stats.distinct_words
    );
    if args.stats {
        eprintln!("{}", stats.to_json()?);
    }

    // Generation phase
    let stdout = io::stdout();
    let written = emit(BufWriter::new(stdout.lock()), table.generate(config.rng(), config.max_words))?;
    info!("Generated {} words", written);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("markov: {}", e);
            ExitCode::FAILURE
        }
    }
}
