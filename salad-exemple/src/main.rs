use rand::rngs::StdRng;
use rand::SeedableRng;

use salad_core::bank::{Separator, WordBank};
use salad_core::form::FormInput;
use salad_core::generator::{generate, generate_with_rng, GenerationResult};
use salad_core::request::{GenerationRequest, Mode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=warn (or lower) to see fallback diagnostics
    env_logger::init();

    // Raw text is split on the separator, trimmed, lower-cased and deduplicated
    let bank = WordBank::normalize("Lorem, ipsum, DOLOR, sit, amet, lorem", Separator::Comma);
    println!("Bank: {:?}", bank.words());

    // 8 random words, joined by spaces and closed by a period
    let words = GenerationRequest::new(8, Mode::Words);
    println!("Words: {:?}", generate(&bank, &words));

    // 3 sentences of 3 to 6 words each
    let sentences = GenerationRequest::new(3, Mode::Sentences).with_sentence_length(3, 6)?;
    println!("Sentences: {:?}", generate(&bank, &sentences));

    // A seeded generator always gives the same salad
    let first = generate_with_rng(&bank, &sentences, &mut StdRng::seed_from_u64(7));
    let second = generate_with_rng(&bank, &sentences, &mut StdRng::seed_from_u64(7));
    println!("Reproducible: {}", first == second);

    // Asking for more than the ceiling produces a notice, nothing is drawn
    let too_many = GenerationRequest::new(300, Mode::Words).with_ceiling(250)?;
    match generate(&bank, &too_many) {
        GenerationResult::LimitExceeded { ceiling } => println!("Limit: at most {ceiling}"),
        _ => println!("Should not happen"),
    }

    // An empty bank is reported instead of drawing from nothing
    let empty = WordBank::normalize(" , ,", Separator::Comma);
    match generate(&empty, &words) {
        GenerationResult::EmptyBank => println!("Empty bank: no words available"),
        _ => println!("Should not happen"),
    }

    // Invalid sentence bounds are rejected when the request is built
    match GenerationRequest::new(1, Mode::Sentences).with_sentence_length(5, 2) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Raw form values: an unknown mode falls back to 'words' (logged as a warning)
    let form = FormInput {
        bank: "red green blue".to_owned(),
        separator: " ".to_owned(),
        mode: "paragraphs".to_owned(),
        count: "4".to_owned(),
        ..FormInput::default()
    };
    let submission = form.submit(250)?;
    println!("Form ({}): {:?}", submission.request.mode(), generate(&submission.bank, &submission.request));

    // Non-numeric counts are rejected
    let form = FormInput { count: "lots".to_owned(), ..form };
    match form.submit(250) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    Ok(())
}
