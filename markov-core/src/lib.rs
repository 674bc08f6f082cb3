//! Markov chain text generation library.
//!
//! This crate learns an order-`NPREF` word Markov chain from a corpus and
//! generates new text from it:
//! - Whitespace tokenization of any buffered reader
//! - A table mapping every `NPREF`-word prefix to its observed suffixes
//! - Uniform single-pass sampling of the next word
//! - A bounded, reproducible generator
//!
//! ```
//! use markov_core::model::state_table::StateTable;
//! use markov_core::model::config::GenerationConfig;
//!
//! let table: StateTable = StateTable::from_text("the cat sat on the mat");
//! let config = GenerationConfig::new(100, Some(1));
//! let words: Vec<&str> = table.generate(config.rng(), config.max_words).collect();
//! assert_eq!(words.join(" "), "the cat sat on the mat");
//! ```

/// Chain construction, sampling and generation.
pub mod model;

/// Error type shared by the library.
pub mod error;

/// Corpus reading and word output helpers.
pub mod io;

pub use error::{MarkovError, Result};
pub use model::prefix::{NONWORD, NPREF};
