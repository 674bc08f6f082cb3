use std::collections::{HashMap, HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::generator::Generator;
use super::prefix::{NONWORD, NPREF, Prefix};
use crate::error::Result;

/// The learned model: every observed prefix mapped to the words that followed it.
///
/// Conceptually each entry is a node of a Markov chain. Unlike a counted
/// transition map, suffixes are kept as a flat list so that a word observed
/// twice after the same prefix is stored twice.
///
/// # Responsibilities
/// - Record suffixes against prefixes during construction
/// - Serve read-only suffix lookups during generation
///
/// # Invariants
/// - Every key is exactly `N` words long
/// - Every stored suffix list is non-empty
/// - List length equals the number of observations of that prefix
#[derive(Clone, Debug, Default)]
pub struct StateTable<const N: usize = NPREF> {
	/// Suffixes in insertion order, keyed by prefix.
	states: HashMap<Prefix<N>, Vec<String>>,
}

/// Summary of a built table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TableStats {
	/// Number of distinct prefixes.
	pub prefixes: usize,
	/// Total stored suffixes, duplicates and sentinels included.
	pub suffixes: usize,
	/// Longest suffix list.
	pub max_suffixes: usize,
	/// Distinct real words appearing as suffixes.
	pub distinct_words: usize,
}

impl TableStats {
	/// Renders the stats as a single JSON object.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

impl<const N: usize> StateTable<N> {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self { states: HashMap::new() }
	}

	/// Appends `word` to the suffix list of `prefix`, creating the entry if needed.
	///
	/// Both the key and the word are copied into the table.
	pub fn record_suffix(&mut self, prefix: &Prefix<N>, word: &str) {
		match self.states.get_mut(prefix) {
			Some(suffixes) => suffixes.push(word.to_owned()),
			None => {
				self.states.insert(prefix.clone(), vec![word.to_owned()]);
			}
		}
	}

	/// Returns every suffix observed after `prefix`.
	///
	/// Unknown prefixes give an empty slice; no entry is created.
	pub fn suffixes_for(&self, prefix: &Prefix<N>) -> &[String] {
		self.states.get(prefix).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Returns `true` if `prefix` was observed at least once.
	pub fn contains(&self, prefix: &Prefix<N>) -> bool {
		self.states.contains_key(prefix)
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Total number of stored suffixes across all prefixes.
	pub fn suffix_count(&self) -> usize {
		self.states.values().map(Vec::len).sum()
	}

	/// Iterates over `(prefix, suffixes)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&Prefix<N>, &[String])> {
		self.states.iter().map(|(k, v)| (k, v.as_slice()))
	}

	/// Computes a summary of the table contents.
	pub fn stats(&self) -> TableStats {
		let mut words: HashSet<&str> = HashSet::new();
		let mut max_suffixes = 0;
		for suffixes in self.states.values() {
			max_suffixes = max_suffixes.max(suffixes.len());
			words.extend(suffixes.iter().map(String::as_str).filter(|w| *w != NONWORD));
		}

		TableStats {
			prefixes: self.len(),
			suffixes: self.suffix_count(),
			max_suffixes,
			distinct_words: words.len(),
		}
	}

	/// Starts a generation run over this table.
	///
	/// # Parameters
	/// - `rng`: Source of randomness, seed it for reproducible output.
	/// - `max_words`: Upper bound on the number of emitted words.
	pub fn generate<R: Rng>(&self, rng: R, max_words: usize) -> Generator<'_, R, N> {
		Generator::new(self, rng, max_words)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn prefix(a: &str, b: &str) -> Prefix {
		Prefix::new([a.to_owned(), b.to_owned()])
	}

	#[test]
	fn record_creates_entry_on_first_use() {
		let mut table: StateTable = StateTable::new();
		assert!(table.is_empty());
		table.record_suffix(&prefix("a", "b"), "c");
		assert_eq!(table.len(), 1);
		assert!(table.contains(&prefix("a", "b")));
		assert_eq!(table.suffixes_for(&prefix("a", "b")), ["c"]);
	}

	#[test]
	fn duplicates_are_kept_in_insertion_order() {
		let mut table: StateTable = StateTable::new();
		let key = prefix("a", "b");
		for w in ["c", "d", "c"] {
			table.record_suffix(&key, w);
		}
		assert_eq!(table.len(), 1);
		assert_eq!(table.suffixes_for(&key), ["c", "d", "c"]);
		assert_eq!(table.suffix_count(), 3);
	}

	#[test]
	fn lookup_of_unknown_prefix_is_empty_and_side_effect_free() {
		let table: StateTable = StateTable::new();
		assert!(table.suffixes_for(&prefix("x", "y")).is_empty());
		assert!(!table.contains(&prefix("x", "y")));
		assert!(table.is_empty());
	}

	#[test]
	fn keys_compare_on_every_word() {
		let mut table: StateTable = StateTable::new();
		table.record_suffix(&prefix("a", "b"), "1");
		table.record_suffix(&prefix("b", "a"), "2");
		assert_eq!(table.len(), 2);
		assert_eq!(table.suffixes_for(&prefix("a", "b")), ["1"]);
		assert_eq!(table.suffixes_for(&prefix("b", "a")), ["2"]);
	}

	#[test]
	fn stats_summarize_contents() {
		let mut table: StateTable = StateTable::new();
		table.record_suffix(&Prefix::sentinel(), "the");
		table.record_suffix(&prefix(NONWORD, "the"), "cat");
		table.record_suffix(&prefix(NONWORD, "the"), "cat");
		table.record_suffix(&prefix("the", "cat"), NONWORD);

		let stats = table.stats();
		assert_eq!(stats, TableStats { prefixes: 3, suffixes: 4, max_suffixes: 2, distinct_words: 2 });
		assert_eq!(
			stats.to_json().unwrap(),
			r#"{"prefixes":3,"suffixes":4,"max_suffixes":2,"distinct_words":2}"#
		);
	}

	#[test]
	fn iter_visits_every_entry() {
		let mut table: StateTable = StateTable::new();
		table.record_suffix(&prefix("a", "b"), "c");
		table.record_suffix(&prefix("b", "c"), "d");
		let mut keys: Vec<String> = table.iter().map(|(k, _)| k.to_string()).collect();
		keys.sort();
		assert_eq!(keys, ["a b", "b c"]);
	}
}
