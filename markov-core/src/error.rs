use std::io;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MarkovError>;

/// Errors surfaced by the chain builder and its I/O helpers.
///
/// Generation itself never fails: running out of suffixes or reaching the
/// sentinel are normal terminal states, not errors.
#[derive(Error, Debug)]
pub enum MarkovError {
	/// Reading the corpus or writing generated words failed.
	#[error("{context}: {source}")]
	Io {
		context: String,
		#[source]
		source: io::Error,
	},

	/// A configuration file is not valid JSON for `GenerationConfig`.
	#[error("Invalid config {path}: {source}")]
	Config {
		path: String,
		#[source]
		source: serde_json::Error,
	},

	/// The table statistics could not be encoded.
	#[error("Failed to encode table statistics: {0}")]
	Stats(#[from] serde_json::Error),
}

impl MarkovError {
	/// Wraps an `io::Error` with a short description of what was being done.
	pub fn io(context: impl Into<String>, source: io::Error) -> Self {
		Self::Io { context: context.into(), source }
	}

	/// Returns `true` when the underlying cause is a closed output pipe.
	pub fn is_broken_pipe(&self) -> bool {
		matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::BrokenPipe)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn io_error_keeps_context() {
		let err = MarkovError::io("reading corpus", io::Error::new(io::ErrorKind::Other, "boom"));
		assert_eq!(err.to_string(), "reading corpus: boom");
		assert!(!err.is_broken_pipe());
	}

	#[test]
	fn broken_pipe_is_detected() {
		let err = MarkovError::io("writing output", io::Error::from(io::ErrorKind::BrokenPipe));
		assert!(err.is_broken_pipe());
	}
}
