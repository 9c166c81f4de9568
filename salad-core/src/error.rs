use thiserror::Error;

/// Errors raised while building a [`GenerationRequest`](crate::request::GenerationRequest).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
	#[error("Words per sentence must satisfy 1 <= min <= max, got {min}..={max}")]
	InvalidSentenceLength { min: u32, max: u32 },

	#[error("Sentences can have at most {limit} words, got {max}")]
	SentenceTooLong { max: u32, limit: u32 },

	#[error("Ceiling must be at least 1, got {0}")]
	InvalidCeiling(u32),
}

/// Errors raised while parsing a [`FormInput`](crate::form::FormInput).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
	/// A numeric field did not parse to a finite number.
	#[error("{field} must be a number, got '{value}'")]
	NotANumber { field: &'static str, value: String },

	#[error(transparent)]
	Request(#[from] RequestError),
}
