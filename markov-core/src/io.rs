use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{MarkovError, Result};

/// Opens the corpus source.
///
/// - `None` or `"-"` reads from standard input
/// - Any other path is opened as a file and buffered
pub fn open_input<P: AsRef<Path>>(path: Option<P>) -> Result<Box<dyn BufRead>> {
	match path {
		Some(p) if p.as_ref() != Path::new("-") => {
			let p = p.as_ref();
			let file = File::open(p)
				.map_err(|e| MarkovError::io(format!("Cannot open {}", p.display()), e))?;
			Ok(Box::new(BufReader::new(file)))
		}
		_ => Ok(Box::new(BufReader::new(io::stdin()))),
	}
}

/// Splits `text` on runs of ASCII whitespace (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`).
///
/// Non-ASCII spaces such as U+00A0 stay inside the word.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
	text.split(|c: char| c.is_ascii_whitespace() || c == '\x0B')
		.filter(|word| !word.is_empty())
}

/// Splits a reader into whitespace-delimited words and hands each one to `f`.
///
/// - Reads one line at a time, the buffer never outlives this call
/// - Invalid UTF-8 is replaced with U+FFFD instead of failing the read
/// - Words have no length limit
///
/// Returns the number of words seen.
pub fn for_each_word<R, F>(mut reader: R, mut f: F) -> io::Result<usize>
where
	R: BufRead,
	F: FnMut(&str),
{
	let mut buf = Vec::new();
	let mut count = 0;

	loop {
		buf.clear();
		if reader.read_until(b'\n', &mut buf)? == 0 {
			break;
		}
		let line: Cow<'_, str> = String::from_utf8_lossy(&buf);
		for word in split_words(&line) {
			f(word);
			count += 1;
		}
	}

	Ok(count)
}

/// Writes one word per line and flushes the writer.
///
/// Returns the number of words written.
pub fn write_words<'a, W, I>(mut writer: W, words: I) -> io::Result<usize>
where
	W: Write,
	I: IntoIterator<Item = &'a str>,
{
	let mut count = 0;
	for word in words {
		writeln!(writer, "{}", word)?;
		count += 1;
	}
	writer.flush()?;
	Ok(count)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn collect(input: &[u8]) -> Vec<String> {
		let mut words = Vec::new();
		for_each_word(Cursor::new(input), |w| words.push(w.to_owned())).unwrap();
		words
	}

	#[test]
	fn splits_on_any_whitespace_run() {
		assert_eq!(collect(b"  the\tcat \n\n sat\r\non   the mat\n"), ["the", "cat", "sat", "on", "the", "mat"]);
	}

	#[test]
	fn non_ascii_spaces_stay_inside_words() {
		let input = "foo\u{a0}bar baz\u{3000}qux\x0Bend";
		assert_eq!(collect(input.as_bytes()), ["foo\u{a0}bar", "baz\u{3000}qux", "end"]);
	}

	#[test]
	fn split_words_skips_empty_runs() {
		let words: Vec<&str> = split_words("\r\n a \x0C\tb  ").collect();
		assert_eq!(words, ["a", "b"]);
	}

	#[test]
	fn keeps_punctuation_and_long_tokens() {
		let long = "x".repeat(500);
		let input = format!("hello, world! {}", long);
		let words = collect(input.as_bytes());
		assert_eq!(words.len(), 3);
		assert_eq!(words[0], "hello,");
		assert_eq!(words[1], "world!");
		assert_eq!(words[2].len(), 500);
	}

	#[test]
	fn empty_input_has_no_words() {
		assert!(collect(b"").is_empty());
		assert!(collect(b" \n\t \n").is_empty());
	}

	#[test]
	fn invalid_utf8_is_replaced() {
		let words = collect(b"ok \xFF\xFE end");
		assert_eq!(words, ["ok", "\u{FFFD}\u{FFFD}", "end"]);
	}

	#[test]
	fn last_line_without_newline_is_read() {
		assert_eq!(collect(b"a b\nc"), ["a", "b", "c"]);
	}

	#[test]
	fn write_words_one_per_line() {
		let mut out = Vec::new();
		let n = write_words(&mut out, ["the", "cat"]).unwrap();
		assert_eq!(n, 2);
		assert_eq!(out, b"the\ncat\n");
	}

	#[test]
	fn open_input_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "one two\nthree").unwrap();
		let reader = open_input(Some(file.path())).unwrap();
		let mut words = Vec::new();
		for_each_word(reader, |w| words.push(w.to_owned())).unwrap();
		assert_eq!(words, ["one", "two", "three"]);
	}

	#[test]
	fn open_input_missing_file_fails() {
		let err = match open_input(Some("/definitely/not/here.txt")) {
			Ok(_) => panic!("expected an error"),
			Err(e) => e,
		};
		assert!(err.to_string().starts_with("Cannot open /definitely/not/here.txt"));
	}
}
