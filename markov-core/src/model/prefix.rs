use std::fmt;

/// Number of words in a prefix.
pub const NPREF: usize = 2;

/// Reserved token marking the start and end of the corpus.
///
/// A newline can never appear inside a whitespace-delimited word, so the
/// tokenizer cannot produce it.
pub const NONWORD: &str = "\n";

/// A fixed-length window of `N` consecutive words.
///
/// Used both as the lookup key of the state table and as the live sliding
/// context while building or generating.
///
/// # Invariants
/// - Always holds exactly `N` words (enforced by the array type)
/// - Every word is an owned copy, never a view into a reused buffer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prefix<const N: usize = NPREF> {
	words: [String; N],
}

impl<const N: usize> Prefix<N> {
	/// Creates a prefix from explicit words.
	pub fn new(words: [String; N]) -> Self {
		Self { words }
	}

	/// Creates the all-sentinel prefix used at the start of both phases.
	pub fn sentinel() -> Self {
		Self { words: std::array::from_fn(|_| NONWORD.to_owned()) }
	}

	/// Words of the prefix, oldest first.
	pub fn words(&self) -> &[String; N] {
		&self.words
	}

	/// Returns `true` if every position holds the sentinel.
	pub fn is_sentinel(&self) -> bool {
		self.words.iter().all(|w| w == NONWORD)
	}

	/// Drops the oldest word and appends `word` at the end.
	///
	/// The remaining words keep their order. `word` is copied, so the caller
	/// may reuse its buffer afterwards.
	pub fn slide(&mut self, word: &str) {
		if N == 0 {
			return;
		}
		self.words.rotate_left(1);
		if let Some(last) = self.words.last_mut() {
			last.clear();
			last.push_str(word);
		}
	}
}

impl<const N: usize> Default for Prefix<N> {
	fn default() -> Self {
		Self::sentinel()
	}
}

impl<const N: usize> fmt::Display for Prefix<N> {
	/// Renders the words separated by spaces, the sentinel as `⟂`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, word) in self.words.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			f.write_str(if word == NONWORD { "⟂" } else { word.as_str() })?;
		}
		Ok(())
	}
}
