use rand::Rng;

/// Picks one element uniformly at random in a single pass (reservoir of size 1).
///
/// The length of the sequence does not need to be known up front. The `n`-th
/// element seen replaces the held candidate with probability `1/n`, which
/// leaves every element with the same final probability. Duplicates are
/// separate elements, so a value stored twice is twice as likely.
///
/// Returns `None` if the iterator is empty.
pub fn reservoir_sample<I, R>(items: I, rng: &mut R) -> Option<I::Item>
where
	I: IntoIterator,
	R: Rng,
{
	let mut chosen = None;
	let mut seen: usize = 0;

	for item in items {
		seen += 1;
		if rng.random_range(0..seen) == 0 {
			chosen = Some(item);
		}
	}

	chosen
}
