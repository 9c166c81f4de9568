use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Delimiter used to split raw bank text into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
	#[default]
	Comma,
	Space,
}

impl Separator {
	/// Returns the delimiter character.
	pub fn as_char(self) -> char {
		match self {
			Separator::Comma => ',',
			Separator::Space => ' ',
		}
	}
}

impl fmt::Display for Separator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Separator::Comma => f.write_str("comma"),
			Separator::Space => f.write_str("space"),
		}
	}
}

/// Ordered set of candidate words.
///
/// A `WordBank` is always derived from raw text through [`WordBank::normalize`]
/// and is never mutated afterwards. Callers recompute it whenever the raw text
/// or the separator changes.
///
/// # Invariants
/// - Every word is trimmed, lower-cased and non-empty
/// - No word appears twice
/// - Order follows the first occurrence in the raw input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
	words: Vec<String>,
}

impl WordBank {
	/// Builds a bank from raw text.
	///
	/// - Splits `raw` on every occurrence of `separator`
	/// - Trims and lower-cases each fragment
	/// - Drops empty fragments and later duplicates
	///
	/// An empty result is valid, not an error.
	pub fn normalize(raw: &str, separator: Separator) -> Self {
		let mut seen = HashSet::new();
		let mut words = Vec::new();

		for fragment in raw.split(separator.as_char()) {
			let word = fragment.trim().to_lowercase();
			if word.is_empty() {
				continue;
			}
			if seen.insert(word.clone()) {
				words.push(word);
			}
		}

		Self { words }
	}

	/// Returns the words in first-seen order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Checks whether `word` is in the bank (exact, already normalized match).
	pub fn contains(&self, word: &str) -> bool {
		self.words.iter().any(|w| w == word)
	}

	/// Draws one word uniformly at random, with replacement.
	///
	/// Returns `None` if the bank is empty.
	pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.words.choose(rng).map(String::as_str)
	}
}
