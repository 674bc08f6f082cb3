use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, Result};

/// Default maximum number of generated words.
pub const MAXGEN: usize = 10_000;

/// Startup parameters of a generation run.
///
/// # Responsibilities
/// - Bound the number of emitted words (`max_words`)
/// - Optionally pin the random sequence (`seed`) for reproducible output
///
/// The prefix order is not part of the configuration; it is fixed at
/// compile time through `NPREF`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
	/// Maximum number of words to emit.
	pub max_words: usize,

	/// Seed for the random generator, `None` draws one from the OS.
	pub seed: Option<u64>,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self { max_words: MAXGEN, seed: None }
	}
}

impl GenerationConfig {
	/// Creates a config with an explicit budget and seed.
	pub fn new(max_words: usize, seed: Option<u64>) -> Self {
		Self { max_words, seed }
	}

	/// Loads a config from a JSON file.
	///
	/// Missing fields keep their default value, so `{"seed": 7}` is a valid
	/// config with the default budget.
	///
	/// # Errors
	/// - `MarkovError::Io` if the file cannot be read
	/// - `MarkovError::Config` if the content is not a valid config
	pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path)
			.map_err(|e| MarkovError::io(format!("Cannot read config {}", path.display()), e))?;
		serde_json::from_str(&contents).map_err(|source| MarkovError::Config {
			path: path.display().to_string(),
			source,
		})
	}

	/// Builds the random generator described by this config.
	///
	/// Two calls with the same `seed` produce identical sequences.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}
