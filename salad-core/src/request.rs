use std::fmt;

use crate::error::RequestError;

/// Default maximum number of words or sentences per request.
pub const DEFAULT_CEILING: u32 = 250;

/// Default minimum number of words in a generated sentence.
pub const DEFAULT_MIN_WORDS: u32 = 4;

/// Default maximum number of words in a generated sentence.
pub const DEFAULT_MAX_WORDS: u32 = 12;

/// Upper bound for `max_words`, keeping each sentence short and bounded.
pub const MAX_WORDS_PER_SENTENCE: u32 = 100;

/// What a request produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
	/// A single run of random words ending with a period.
	#[default]
	Words,
	/// A run of capitalised pseudo-sentences.
	Sentences,
}

impl Mode {
	/// External name of the mode, as accepted by [`Mode::from_external`].
	pub fn as_str(self) -> &'static str {
		match self {
			Mode::Words => "words",
			Mode::Sentences => "sentences",
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Parameters of a single generation.
///
/// Built fresh at submission time, immutable once built and consumed once
/// by [`generate`](crate::generator::generate).
///
/// # Invariants
/// - `1 <= min_words <= max_words <= MAX_WORDS_PER_SENTENCE`
/// - `ceiling >= 1`
///
/// `count` itself is not bounded here: a count above the ceiling is a valid
/// request whose outcome is a limit notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
	count: u32,
	mode: Mode,
	min_words: u32,
	max_words: u32,
	ceiling: u32,
}

impl GenerationRequest {
	/// Creates a request with the default sentence length and ceiling.
	pub fn new(count: u32, mode: Mode) -> Self {
		Self {
			count,
			mode,
			min_words: DEFAULT_MIN_WORDS,
			max_words: DEFAULT_MAX_WORDS,
			ceiling: DEFAULT_CEILING,
		}
	}

	/// Sets the inclusive range of words per sentence.
	///
	/// # Errors
	/// Returns an error if `min` is zero, `max < min` or
	/// `max > MAX_WORDS_PER_SENTENCE`.
	pub fn with_sentence_length(mut self, min: u32, max: u32) -> Result<Self, RequestError> {
		if min == 0 || max < min {
			return Err(RequestError::InvalidSentenceLength { min, max });
		}
		if max > MAX_WORDS_PER_SENTENCE {
			return Err(RequestError::SentenceTooLong { max, limit: MAX_WORDS_PER_SENTENCE });
		}
		self.min_words = min;
		self.max_words = max;
		Ok(self)
	}

	/// Sets the maximum allowed count.
	///
	/// # Errors
	/// Returns an error if `ceiling` is zero.
	pub fn with_ceiling(mut self, ceiling: u32) -> Result<Self, RequestError> {
		if ceiling == 0 {
			return Err(RequestError::InvalidCeiling(ceiling));
		}
		self.ceiling = ceiling;
		Ok(self)
	}

	pub fn count(&self) -> u32 {
		self.count
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn min_words(&self) -> u32 {
		self.min_words
	}

	pub fn max_words(&self) -> u32 {
		self.max_words
	}

	pub fn ceiling(&self) -> u32 {
		self.ceiling
	}

	/// Whether the requested count is above the ceiling.
	pub fn exceeds_ceiling(&self) -> bool {
		self.count > self.ceiling
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let request = GenerationRequest::new(3, Mode::Words);
		assert_eq!(request.count(), 3);
		assert_eq!(request.mode(), Mode::Words);
		assert_eq!(request.min_words(), DEFAULT_MIN_WORDS);
		assert_eq!(request.max_words(), DEFAULT_MAX_WORDS);
		assert_eq!(request.ceiling(), DEFAULT_CEILING);
	}

	#[test]
	fn sentence_length_accepts_equal_bounds() {
		let request = GenerationRequest::new(1, Mode::Sentences)
			.with_sentence_length(2, 2)
			.unwrap();
		assert_eq!((request.min_words(), request.max_words()), (2, 2));
	}

	#[test]
	fn sentence_length_rejects_zero_and_inverted_range() {
		let request = GenerationRequest::new(1, Mode::Sentences);
		assert_eq!(
			request.clone().with_sentence_length(0, 3),
			Err(RequestError::InvalidSentenceLength { min: 0, max: 3 })
		);
		assert_eq!(
			request.with_sentence_length(5, 4),
			Err(RequestError::InvalidSentenceLength { min: 5, max: 4 })
		);
	}

	#[test]
	fn sentence_length_is_capped() {
		let request = GenerationRequest::new(1, Mode::Sentences);
		assert!(request.clone().with_sentence_length(1, MAX_WORDS_PER_SENTENCE).is_ok());
		assert_eq!(
			request.with_sentence_length(1, MAX_WORDS_PER_SENTENCE + 1),
			Err(RequestError::SentenceTooLong {
				max: MAX_WORDS_PER_SENTENCE + 1,
				limit: MAX_WORDS_PER_SENTENCE,
			})
		);
	}

	#[test]
	fn ceiling_must_be_positive() {
		let request = GenerationRequest::new(1, Mode::Words);
		assert_eq!(request.clone().with_ceiling(0), Err(RequestError::InvalidCeiling(0)));
		assert!(request.with_ceiling(1).is_ok());
	}

	#[test]
	fn exceeds_ceiling_is_strict() {
		let at = GenerationRequest::new(250, Mode::Words);
		let above = GenerationRequest::new(251, Mode::Words);
		assert!(!at.exceeds_ceiling());
		assert!(above.exceeds_ceiling());
	}

	#[test]
	fn mode_display() {
		assert_eq!(Mode::Words.to_string(), "words");
		assert_eq!(Mode::Sentences.to_string(), "sentences");
	}
}
