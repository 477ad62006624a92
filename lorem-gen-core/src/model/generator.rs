use log::debug;
use rand::Rng;

use crate::config::GenerationLimits;
use crate::error::LoremError;
use crate::model::generated_text::{GeneratedText, PARAGRAPH_SEPARATOR};
use crate::model::generation_parameters::{clamp_paragraphs, clamp_word_range, GenerationParameters};
use crate::model::vocabulary::Vocabulary;

/// Canonical opening of an anchored paragraph.
pub const LOREM_ANCHOR: [&str; 5] = ["Lorem", "ipsum", "dolor", "sit", "amet"];

/// High-level Lorem Ipsum generator.
///
/// # Responsibilities
/// - Hold the sampling vocabulary and the generation limits
/// - Generate single paragraphs and multi-paragraph text
/// - Validate raw parameters before generating (`generate`)
///
/// The generator holds no mutable state. Randomness is supplied by the caller
/// on every call, so a single instance can serve concurrent requests and tests
/// can use a seeded source.
#[derive(Clone, Debug, Default)]
pub struct LoremGenerator {
	vocabulary: Vocabulary,
	limits: GenerationLimits,
}

impl LoremGenerator {
	pub fn new(vocabulary: Vocabulary, limits: GenerationLimits) -> Self {
		Self { vocabulary, limits }
	}

	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	pub fn limits(&self) -> &GenerationLimits {
		&self.limits
	}

	/// Generates one paragraph.
	///
	/// # Parameters
	/// - `min_words` / `max_words`: inclusive word-count range, clamped to the limits.
	/// - `anchor`: start with "Lorem ipsum dolor sit amet" when the drawn
	///   word count leaves room for it (at least 5 words).
	/// - `rng`: random source used for the word count and word selection.
	///
	/// # Returns
	/// A single sentence with a capitalized first word and one trailing period.
	pub fn generate_paragraph<R: Rng + ?Sized>(
		&self,
		min_words: usize,
		max_words: usize,
		anchor: bool,
		rng: &mut R,
	) -> String {
		let (min_words, max_words) = clamp_word_range(min_words, max_words, &self.limits);
		let word_count = rng.random_range(min_words..=max_words);

		let mut words: Vec<&str> = Vec::with_capacity(word_count);
		if anchor && word_count >= LOREM_ANCHOR.len() {
			words.extend(LOREM_ANCHOR);
			words.extend(self.vocabulary.random_words(word_count - LOREM_ANCHOR.len(), &mut *rng));
		} else {
			words.extend(self.vocabulary.random_words(word_count, &mut *rng));
		}

		let mut paragraph = String::new();
		for (i, word) in words.iter().enumerate() {
			if i == 0 {
				paragraph.push_str(&capitalize(word));
			} else {
				paragraph.push(' ');
				paragraph.push_str(word);
			}
		}
		paragraph.push('.');
		paragraph
	}

	/// Generates `paragraphs` paragraphs joined by a blank line.
	///
	/// # Behavior
	/// - `paragraphs` is clamped to `[1, max_paragraphs]`.
	/// - Only the first paragraph may be anchored, and only if `start_with_lorem` is set.
	pub fn generate_text<R: Rng + ?Sized>(
		&self,
		paragraphs: usize,
		min_words: usize,
		max_words: usize,
		start_with_lorem: bool,
		rng: &mut R,
	) -> String {
		let paragraphs = clamp_paragraphs(paragraphs, &self.limits);

		(0..paragraphs)
			.map(|i| self.generate_paragraph(min_words, max_words, start_with_lorem && i == 0, &mut *rng))
			.collect::<Vec<_>>()
			.join(PARAGRAPH_SEPARATOR)
	}

	/// Validates raw parameters, then generates text from them.
	///
	/// # Errors
	/// Returns `LoremError::InvalidWordRange` if `min_words > max_words` in the
	/// caller's values. The check runs before any clamping.
	pub fn generate<R: Rng + ?Sized>(
		&self,
		params: &GenerationParameters,
		rng: &mut R,
	) -> Result<GeneratedText, LoremError> {
		params.validate_word_range()?;

		let clamped = params.clamped(&self.limits);
		if clamped != *params {
			debug!("Clamped generation parameters {params:?} to {clamped:?}");
		}

		let text = self.generate_text(
			params.paragraphs,
			params.min_words,
			params.max_words,
			params.start_with_lorem,
			rng,
		);
		Ok(GeneratedText::new(text, clamped.paragraphs))
	}
}

/// Uppercases the first character, leaving the rest untouched.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn word_count(paragraph: &str) -> usize {
		paragraph.split_whitespace().count()
	}

	#[test]
	fn capitalize_first_letter_only() {
		assert_eq!(capitalize("lorem"), "Lorem");
		assert_eq!(capitalize("eIusmod"), "EIusmod");
		assert_eq!(capitalize(""), "");
	}

	#[test]
	fn exact_anchor_paragraph() {
		let generator = LoremGenerator::default();
		let mut rng = StdRng::seed_from_u64(42);
		let generated = generator.generate(&GenerationParameters::new(1, 5, 5, true), &mut rng).unwrap();
		assert_eq!(generated.text, "Lorem ipsum dolor sit amet.");
		assert_eq!(generated.paragraphs, 1);
		assert_eq!(generated.total_words, 5);
	}

	#[test]
	fn one_word_paragraphs() {
		let generator = LoremGenerator::default();
		let mut rng = StdRng::seed_from_u64(3);
		let generated = generator.generate(&GenerationParameters::new(2, 1, 1, false), &mut rng).unwrap();
		assert_eq!(generated.total_words, 2);

		let paragraphs: Vec<&str> = generated.paragraphs().collect();
		assert_eq!(paragraphs.len(), 2);
		for paragraph in paragraphs {
			let word = paragraph.strip_suffix('.').unwrap();
			assert!(!word.contains(' '));
			assert!(word.chars().next().unwrap().is_uppercase());
			assert!(generator.vocabulary().contains(&word.to_lowercase()));
		}
	}

	#[test]
	fn anchor_needs_five_words() {
		let generator = LoremGenerator::default();
		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..50 {
			let paragraph = generator.generate_paragraph(1, 4, true, &mut rng);
			assert!(word_count(&paragraph) <= 4);
			assert!(!paragraph.starts_with("Lorem ipsum dolor sit amet"));
		}
	}

	#[test]
	fn too_many_paragraphs_are_clamped() {
		let generator = LoremGenerator::default();
		let mut rng = StdRng::seed_from_u64(5);
		let text = generator.generate_text(15, 5, 20, true, &mut rng);
		assert_eq!(text.split(PARAGRAPH_SEPARATOR).count(), 10);

		let generated = generator.generate(&GenerationParameters::new(15, 5, 20, true), &mut rng).unwrap();
		assert_eq!(generated.paragraphs, 10);
		assert_eq!(generated.paragraphs().count(), 10);
	}

	#[test]
	fn inverted_range_fails_before_generation() {
		let generator = LoremGenerator::default();
		let mut rng = StdRng::seed_from_u64(0);
		let err = generator.generate(&GenerationParameters::new(1, 20, 5, true), &mut rng).unwrap_err();
		assert_eq!(err, LoremError::InvalidWordRange { min_words: 20, max_words: 5 });
	}

	#[test]
	fn inverted_range_above_limit_is_still_rejected() {
		let generator = LoremGenerator::default();
		let mut rng = StdRng::seed_from_u64(0);
		assert!(generator.generate(&GenerationParameters::new(1, 150, 120, true), &mut rng).is_err());
	}

	#[test]
	fn custom_limits_and_vocabulary() {
		let vocabulary = Vocabulary::new(["alpha"]).unwrap();
		let limits = GenerationLimits::new(2, 3).unwrap();
		let generator = LoremGenerator::new(vocabulary, limits);
		let mut rng = StdRng::seed_from_u64(9);
		let generated = generator.generate(&GenerationParameters::new(5, 3, 50, false), &mut rng).unwrap();
		assert_eq!(generated.text, "Alpha alpha alpha.\n\nAlpha alpha alpha.");
		assert_eq!(generated.paragraphs, 2);
		assert_eq!(generated.total_words, 6);
	}

	#[test]
	fn only_first_paragraph_is_anchored() {
		let generator = LoremGenerator::new(Vocabulary::new(["alpha"]).unwrap(), GenerationLimits::default());
		let mut rng = StdRng::seed_from_u64(21);
		let text = generator.generate_text(3, 6, 6, true, &mut rng);
		assert_eq!(
			text,
			"Lorem ipsum dolor sit amet alpha.\n\nAlpha alpha alpha alpha alpha alpha.\n\nAlpha alpha alpha alpha alpha alpha."
		);
	}

	#[test]
	fn same_seed_same_text() {
		let generator = LoremGenerator::default();
		let a = generator.generate_text(3, 5, 20, true, &mut StdRng::seed_from_u64(99));
		let b = generator.generate_text(3, 5, 20, true, &mut StdRng::seed_from_u64(99));
		assert_eq!(a, b);
	}

	proptest! {
		#[test]
		fn prop_generated_text_shape(
			seed in any::<u64>(),
			paragraphs in 0usize..20,
			min_words in 0usize..120,
			max_words in 0usize..120,
			start_with_lorem in any::<bool>()
		) {
			let generator = LoremGenerator::default();
			let limits = *generator.limits();
			let mut rng = StdRng::seed_from_u64(seed);
			let text = generator.generate_text(paragraphs, min_words, max_words, start_with_lorem, &mut rng);

			let expected = clamp_paragraphs(paragraphs, &limits);
			let (min, max) = clamp_word_range(min_words, max_words, &limits);
			let parts: Vec<&str> = text.split(PARAGRAPH_SEPARATOR).collect();
			prop_assert_eq!(parts.len(), expected);

			for (i, paragraph) in parts.iter().enumerate() {
				let count = word_count(paragraph);
				prop_assert!(count >= min && count <= max);
				prop_assert!(paragraph.ends_with('.'));
				prop_assert!(!paragraph.ends_with(".."));
				prop_assert!(!paragraph.contains('\n'));

				if i == 0 && start_with_lorem && count >= 5 {
					prop_assert!(paragraph.starts_with("Lorem ipsum dolor sit amet"));
				}
			}
		}

		#[test]
		fn prop_total_words_matches_text(
			seed in any::<u64>(),
			paragraphs in 1usize..=10,
			min_words in 1usize..=20,
			extra in 0usize..=20
		) {
			let generator = LoremGenerator::default();
			let mut rng = StdRng::seed_from_u64(seed);
			let params = GenerationParameters::new(paragraphs, min_words, min_words + extra, true);
			let generated = generator.generate(&params, &mut rng).unwrap();
			prop_assert_eq!(generated.paragraphs, paragraphs);
			prop_assert!(generated.total_words >= paragraphs * min_words);
			prop_assert!(generated.total_words <= paragraphs * (min_words + extra));

			let recounted: usize = generated.paragraphs().map(|p| p.split_whitespace().count()).sum();
			prop_assert_eq!(generated.total_words, recounted);
		}
	}
}
