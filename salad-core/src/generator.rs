use log::{debug, info};
use rand::Rng;

use crate::bank::WordBank;
use crate::request::{GenerationRequest, Mode};

/// Outcome of a single generation.
///
/// None of these is a fault: the shell renders each variant with its own
/// wording and replaces any previous outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
	/// Generated text (a word run or a list of sentences).
	Salad(String),
	/// The requested count was above `ceiling`; nothing was generated.
	LimitExceeded { ceiling: u32 },
	/// At least one draw was needed but the bank has no words.
	EmptyBank,
}

impl GenerationResult {
	/// Returns the generated text, if any.
	pub fn as_salad(&self) -> Option<&str> {
		match self {
			GenerationResult::Salad(text) => Some(text),
			_ => None,
		}
	}
}

/// Generates a salad using the thread-local random number generator.
///
/// See [`generate_with_rng`].
pub fn generate(bank: &WordBank, request: &GenerationRequest) -> GenerationResult {
	generate_with_rng(bank, request, &mut rand::rng())
}

/// Generates a salad from `bank` as described by `request`.
///
/// # Behavior
/// - If the count is above the ceiling, returns `LimitExceeded` before
///   consuming any randomness.
/// - If the count is positive and the bank is empty, returns `EmptyBank`.
/// - `Words`: `count` words drawn with replacement, lower-cased, joined by
///   single spaces and closed by one period. A zero count gives `"."`.
/// - `Sentences`: `count` sentences joined by single spaces. Each has a
///   length drawn uniformly in `min_words..=max_words`, a capitalised first
///   word, lower-cased following words and a closing period.
///
/// Passing a seeded generator makes the output reproducible.
pub fn generate_with_rng<R: Rng + ?Sized>(
	bank: &WordBank,
	request: &GenerationRequest,
	rng: &mut R,
) -> GenerationResult {
	if request.exceeds_ceiling() {
		info!("Requested {} items, ceiling is {}", request.count(), request.ceiling());
		return GenerationResult::LimitExceeded { ceiling: request.ceiling() };
	}

	if request.count() > 0 && bank.is_empty() {
		info!("Cannot generate {} {}: the bank is empty", request.count(), request.mode());
		return GenerationResult::EmptyBank;
	}

	debug!(
		"Generating {} {} from {} words",
		request.count(),
		request.mode(),
		bank.len()
	);

	let text = match request.mode() {
		Mode::Words => words(bank, request.count(), rng),
		Mode::Sentences => sentences(bank, request, rng),
	};

	match text {
		Some(text) => GenerationResult::Salad(text),
		None => GenerationResult::EmptyBank,
	}
}

/// Builds a single run of `count` words followed by a period.
fn words<R: Rng + ?Sized>(bank: &WordBank, count: u32, rng: &mut R) -> Option<String> {
	let mut output = Vec::with_capacity(count as usize);
	for _ in 0..count {
		output.push(bank.choose(rng)?.to_lowercase());
	}
	Some(format!("{}.", output.join(" ")))
}

/// Builds `count` sentences joined by single spaces.
fn sentences<R: Rng + ?Sized>(
	bank: &WordBank,
	request: &GenerationRequest,
	rng: &mut R,
) -> Option<String> {
	let mut output = Vec::with_capacity(request.count() as usize);
	for _ in 0..request.count() {
		let length = rng.random_range(request.min_words()..=request.max_words());
		output.push(sentence(bank, length, rng)?);
	}
	Some(output.join(" "))
}

/// Builds one sentence of `length` words.
fn sentence<R: Rng + ?Sized>(bank: &WordBank, length: u32, rng: &mut R) -> Option<String> {
	let mut words = Vec::new();
	for i in 0..length {
		let word = bank.choose(rng)?;
		if i == 0 {
			words.push(capitalize(word));
		} else {
			words.push(word.to_lowercase());
		}
	}
	Some(format!("{}.", words.join(" ")))
}

/// Upper-cases the first character, leaving the rest untouched.
///
/// Only the first character of the upper-case mapping is kept, so the
/// result never gains extra upper-case letters ("ß" gives "S").
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => {
			let upper = first.to_uppercase().next().unwrap_or(first);
			std::iter::once(upper).chain(chars).collect()
		}
		None => String::new(),
	}
}
