use log::warn;

use crate::bank::{Separator, WordBank};
use crate::error::FormError;
use crate::request::{DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, GenerationRequest, Mode};

impl Mode {
	/// Parses an external mode selector.
	///
	/// Only `"words"` and `"sentences"` are recognised. Any other value falls
	/// back to [`Mode::Words`] and is logged as a warning.
	pub fn from_external(value: &str) -> Self {
		match value {
			"words" => Mode::Words,
			"sentences" => Mode::Sentences,
			other => {
				warn!("Unknown mode '{other}', falling back to 'words'");
				Mode::Words
			}
		}
	}
}

impl Separator {
	/// Parses an external separator value.
	///
	/// Only `","` and `" "` are recognised. Any other value falls back to
	/// [`Separator::Comma`] and is logged as a warning.
	pub fn from_external(value: &str) -> Self {
		match value {
			"," => Separator::Comma,
			" " => Separator::Space,
			other => {
				warn!("Unknown separator '{other}', falling back to ','");
				Separator::Comma
			}
		}
	}
}

/// Raw form values, as typed by the user.
///
/// Nothing here is validated: [`FormInput::submit`] turns it into a typed
/// [`Submission`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
	pub bank: String,
	pub separator: String,
	pub mode: String,
	pub count: String,
	pub min_words: String,
	pub max_words: String,
}

impl Default for FormInput {
	fn default() -> Self {
		Self {
			bank: String::new(),
			separator: ",".to_owned(),
			mode: Mode::Words.as_str().to_owned(),
			count: "10".to_owned(),
			min_words: DEFAULT_MIN_WORDS.to_string(),
			max_words: DEFAULT_MAX_WORDS.to_string(),
		}
	}
}

/// Typed result of a form submission, ready for generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
	pub bank: WordBank,
	pub request: GenerationRequest,
}

impl FormInput {
	/// Normalized bank for the current text and separator.
	///
	/// Recomputed on every call.
	pub fn word_bank(&self) -> WordBank {
		WordBank::normalize(&self.bank, Separator::from_external(&self.separator))
	}

	/// Parses every field and builds the request.
	///
	/// # Behavior
	/// - Unknown mode or separator values fall back to their defaults
	///   (with a warning), they never fail.
	/// - `count`: negative clamps to 0, fractional rounds up.
	/// - `min_words` rounds up, `max_words` rounds down. Both are only read
	///   in sentences mode; words mode keeps the default bounds.
	///
	/// # Errors
	/// - `FormError::NotANumber` if a numeric field is not a finite number.
	/// - `FormError::Request` if the sentence bounds or `ceiling` are invalid.
	pub fn submit(&self, ceiling: u32) -> Result<Submission, FormError> {
		let mode = Mode::from_external(&self.mode);
		let count = parse_number("count", &self.count)?;

		let mut request = GenerationRequest::new(to_u32(count.ceil()), mode).with_ceiling(ceiling)?;
		if mode == Mode::Sentences {
			let min_words = parse_number("min words per sentence", &self.min_words)?;
			let max_words = parse_number("max words per sentence", &self.max_words)?;
			request = request.with_sentence_length(to_u32(min_words.ceil()), to_u32(max_words.floor()))?;
		}

		Ok(Submission { bank: self.word_bank(), request })
	}
}

/// Parses a trimmed numeric field, rejecting NaN and infinities.
fn parse_number(field: &'static str, value: &str) -> Result<f64, FormError> {
	match value.trim().parse::<f64>() {
		Ok(n) if n.is_finite() => Ok(n),
		_ => Err(FormError::NotANumber { field, value: value.to_owned() }),
	}
}

/// Saturating conversion: negatives become 0, huge values become `u32::MAX`.
fn to_u32(value: f64) -> u32 {
	value.clamp(0.0, u32::MAX as f64) as u32
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RequestError;
	use crate::request::MAX_WORDS_PER_SENTENCE;

	fn input(count: &str) -> FormInput {
		FormInput {
			bank: "Apple, banana ,APPLE".to_owned(),
			count: count.to_owned(),
			..FormInput::default()
		}
	}

	#[test]
	fn mode_from_external() {
		assert_eq!(Mode::from_external("words"), Mode::Words);
		assert_eq!(Mode::from_external("sentences"), Mode::Sentences);
		assert_eq!(Mode::from_external("Sentences"), Mode::Words);
		assert_eq!(Mode::from_external("paragraphs"), Mode::Words);
		assert_eq!(Mode::from_external(""), Mode::Words);
	}

	#[test]
	fn separator_from_external() {
		assert_eq!(Separator::from_external(","), Separator::Comma);
		assert_eq!(Separator::from_external(" "), Separator::Space);
		assert_eq!(Separator::from_external(";"), Separator::Comma);
	}

	#[test]
	fn submit_builds_bank_and_request() {
		let submission = input("3").submit(250).unwrap();
		assert_eq!(submission.bank.words(), ["apple", "banana"]);
		assert_eq!(submission.request.count(), 3);
		assert_eq!(submission.request.mode(), Mode::Words);
		assert_eq!(submission.request.ceiling(), 250);
	}

	#[test]
	fn count_is_trimmed_clamped_and_rounded_up() {
		assert_eq!(input(" 7 ").submit(250).unwrap().request.count(), 7);
		assert_eq!(input("-4").submit(250).unwrap().request.count(), 0);
		assert_eq!(input("2.1").submit(250).unwrap().request.count(), 3);
		assert_eq!(input("1e3").submit(250).unwrap().request.count(), 1000);
	}

	#[test]
	fn non_numeric_count_is_rejected() {
		for value in ["", "ten", "NaN", "inf"] {
			assert_eq!(
				input(value).submit(250),
				Err(FormError::NotANumber { field: "count", value: value.to_owned() })
			);
		}
	}

	#[test]
	fn sentence_bounds_round_inward() {
		let form = FormInput {
			mode: "sentences".to_owned(),
			min_words: "1.2".to_owned(),
			max_words: "3.9".to_owned(),
			..input("1")
		};
		let request = form.submit(250).unwrap().request;
		assert_eq!(request.mode(), Mode::Sentences);
		assert_eq!((request.min_words(), request.max_words()), (2, 3));
	}

	#[test]
	fn inverted_bounds_after_rounding_are_rejected() {
		let form = FormInput {
			mode: "sentences".to_owned(),
			min_words: "2.5".to_owned(),
			max_words: "2.5".to_owned(),
			..input("1")
		};
		assert_eq!(
			form.submit(250),
			Err(FormError::Request(RequestError::InvalidSentenceLength { min: 3, max: 2 }))
		);
	}

	#[test]
	fn words_mode_ignores_sentence_bounds() {
		for (min, max) in [("", "12"), ("9", "2"), ("lots", "")] {
			let form = FormInput {
				min_words: min.to_owned(),
				max_words: max.to_owned(),
				..input("3")
			};
			let request = form.submit(250).unwrap().request;
			assert_eq!(request.mode(), Mode::Words);
			assert_eq!((request.min_words(), request.max_words()), (DEFAULT_MIN_WORDS, DEFAULT_MAX_WORDS));
		}
	}

	#[test]
	fn bad_sentence_bound_names_its_field() {
		let form = FormInput {
			mode: "sentences".to_owned(),
			min_words: "few".to_owned(),
			..input("1")
		};
		let error = form.submit(250).unwrap_err();
		assert_eq!(error.to_string(), "min words per sentence must be a number, got 'few'");
	}

	#[test]
	fn huge_sentence_bounds_are_rejected() {
		let form = FormInput {
			mode: "sentences".to_owned(),
			min_words: "4294967295".to_owned(),
			max_words: "4294967295".to_owned(),
			..input("1")
		};
		assert_eq!(
			form.submit(250),
			Err(FormError::Request(RequestError::SentenceTooLong {
				max: u32::MAX,
				limit: MAX_WORDS_PER_SENTENCE,
			}))
		);
	}

	#[test]
	fn zero_ceiling_is_rejected() {
		assert_eq!(
			input("1").submit(0),
			Err(FormError::Request(RequestError::InvalidCeiling(0)))
		);
	}

	#[test]
	fn word_bank_follows_separator() {
		let form = FormInput {
			bank: "red green,blue".to_owned(),
			separator: " ".to_owned(),
			..FormInput::default()
		};
		assert_eq!(form.word_bank().words(), ["red", "green,blue"]);
	}
}
