use std::iter::FusedIterator;

use log::{debug, trace};
use rand::Rng;

use super::prefix::{NONWORD, NPREF, Prefix};
use super::sampler::reservoir_sample;
use super::state_table::StateTable;

/// Where a generation run currently stands.
///
/// `Running` is the only non-terminal state. Once a run leaves it, it never
/// comes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationState {
	/// Words remain in the budget and the last lookup found data.
	Running,
	/// The current prefix has no recorded suffixes.
	Exhausted,
	/// The sampled suffix was the end-of-text sentinel.
	Terminated,
	/// The word budget is spent.
	Done,
}

impl GenerationState {
	pub fn is_terminal(self) -> bool {
		self != Self::Running
	}
}

/// Walks a `StateTable` and yields one word per step.
///
/// # Behavior
/// - Starts from the all-sentinel prefix
/// - Each step samples a suffix of the current prefix uniformly
/// - A real word is yielded and slid into the prefix
/// - A sentinel, a missing prefix or an empty budget ends the run
///
/// # Notes
/// - Borrows the table immutably; the table cannot change while a run is alive.
/// - Yielded words borrow from the table, no copies are made.
#[derive(Debug)]
pub struct Generator<'a, R, const N: usize = NPREF> {
	table: &'a StateTable<N>,
	rng: R,
	prefix: Prefix<N>,
	remaining: usize,
	emitted: usize,
	state: GenerationState,
}

impl<'a, R: Rng, const N: usize> Generator<'a, R, N> {
	/// Creates a run that emits at most `max_words` words.
	pub fn new(table: &'a StateTable<N>, rng: R, max_words: usize) -> Self {
		Self {
			table,
			rng,
			prefix: Prefix::sentinel(),
			remaining: max_words,
			emitted: 0,
			state: GenerationState::Running,
		}
	}

	pub fn state(&self) -> GenerationState {
		self.state
	}

	/// Number of words yielded so far.
	pub fn emitted(&self) -> usize {
		self.emitted
	}

	/// Words left in the budget.
	pub fn remaining(&self) -> usize {
		self.remaining
	}

	/// The current context window.
	pub fn prefix(&self) -> &Prefix<N> {
		&self.prefix
	}

	fn finish(&mut self, state: GenerationState) {
		debug!("Generation stopped after {} words: {:?}", self.emitted, state);
		self.state = state;
	}
}

impl<'a, R: Rng, const N: usize> Iterator for Generator<'a, R, N> {
	type Item = &'a str;

	fn next(&mut self) -> Option<&'a str> {
		if self.state.is_terminal() {
			return None;
		}
		if self.remaining == 0 {
			self.finish(GenerationState::Done);
			return None;
		}

		let table = self.table;
		let word = match reservoir_sample(table.suffixes_for(&self.prefix), &mut self.rng) {
			Some(word) => word,
			None => {
				trace!("No suffix for [{}]", self.prefix);
				self.finish(GenerationState::Exhausted);
				return None;
			}
		};

		if word == NONWORD {
			self.finish(GenerationState::Terminated);
			return None;
		}

		trace!("[{}] -> {}", self.prefix, word);
		self.prefix.slide(word);
		self.remaining -= 1;
		self.emitted += 1;
		if self.remaining == 0 {
			self.finish(GenerationState::Done);
		}

		Some(word.as_str())
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.state.is_terminal() {
			(0, Some(0))
		} else {
			(0, Some(self.remaining))
		}
	}
}

impl<R: Rng, const N: usize> FusedIterator for Generator<'_, R, N> {}
