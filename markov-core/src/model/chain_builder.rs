use std::io::BufRead;

use log::debug;

use super::prefix::{NONWORD, NPREF, Prefix};
use super::state_table::StateTable;
use crate::error::{MarkovError, Result};
use crate::io::{for_each_word, split_words};

/// Builds a `StateTable` word by word.
///
/// Holds the table under construction together with the live sliding
/// prefix. Each word is recorded against the current prefix, then slid in.
///
/// # Example
/// ```
/// use markov_core::model::chain_builder::ChainBuilder;
///
/// let mut builder: ChainBuilder = ChainBuilder::new();
/// builder.add_text("the cat sat");
/// let table = builder.finish();
/// assert_eq!(table.len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct ChainBuilder<const N: usize = NPREF> {
	table: StateTable<N>,
	prefix: Prefix<N>,
	words: usize,
}

impl<const N: usize> ChainBuilder<N> {
	/// Starts an empty table with an all-sentinel prefix.
	pub fn new() -> Self {
		Self {
			table: StateTable::new(),
			prefix: Prefix::sentinel(),
			words: 0,
		}
	}

	/// Records `word` as a suffix of the current prefix, then slides it in.
	pub fn add_word(&mut self, word: &str) {
		self.table.record_suffix(&self.prefix, word);
		self.prefix.slide(word);
		self.words += 1;
	}

	/// Adds every whitespace-delimited word of `text`.
	///
	/// Returns the number of words added.
	pub fn add_text(&mut self, text: &str) -> usize {
		let before = self.words;
		for word in split_words(text) {
			self.add_word(word);
		}
		self.words - before
	}

	/// Reads a whole corpus from `reader`.
	///
	/// # Errors
	/// Returns `MarkovError::Io` if reading fails. Words read before the
	/// failure stay recorded.
	pub fn add_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
		let count = for_each_word(reader, |word| self.add_word(word))
			.map_err(|e| MarkovError::io("Failed to read corpus", e))?;
		debug!("Read {} words, {} prefixes so far", count, self.table.len());
		Ok(count)
	}

	/// Number of input words consumed so far.
	pub fn word_count(&self) -> usize {
		self.words
	}

	/// Read-only view of the table under construction.
	pub fn table(&self) -> &StateTable<N> {
		&self.table
	}

	/// Closes the corpus with the sentinel and returns the finished table.
	///
	/// The sentinel suffix lets generation know where the text ended.
	pub fn finish(mut self) -> StateTable<N> {
		self.table.record_suffix(&self.prefix, NONWORD);
		debug!(
			"Built table: {} words, {} prefixes, {} suffixes",
			self.words,
			self.table.len(),
			self.table.suffix_count()
		);
		self.table
	}
}

impl<const N: usize> StateTable<N> {
	/// Builds a finished table from in-memory text.
	pub fn from_text(text: &str) -> Self {
		let mut builder = ChainBuilder::new();
		builder.add_text(text);
		builder.finish()
	}

	/// Builds a finished table from a reader.
	pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
		let mut builder = ChainBuilder::new();
		builder.add_reader(reader)?;
		Ok(builder.finish())
	}
}
