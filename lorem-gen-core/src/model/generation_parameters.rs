use serde::{Deserialize, Serialize};

use crate::config::GenerationLimits;
use crate::error::LoremError;

/// Default number of paragraphs.
pub const DEFAULT_PARAGRAPHS: usize = 1;
/// Default lower bound on words per paragraph.
pub const DEFAULT_MIN_WORDS: usize = 5;
/// Default upper bound on words per paragraph.
pub const DEFAULT_MAX_WORDS: usize = 20;
/// Whether the first paragraph is anchored by default.
pub const DEFAULT_START_WITH_LOREM: bool = true;

/// Parameters for one generation request.
///
/// Values are kept exactly as the caller supplied them. Validation
/// (`validate_word_range`) must run on these raw values before any clamping,
/// since clamping can hide an inverted range.
///
/// # Responsibilities
/// - Carry the request defaults
/// - Reject an inverted word range
/// - Produce a clamped copy within `GenerationLimits`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationParameters {
	/// Number of paragraphs to generate.
	pub paragraphs: usize,

	/// Minimum words per paragraph (inclusive).
	pub min_words: usize,

	/// Maximum words per paragraph (inclusive).
	pub max_words: usize,

	/// Anchor the first paragraph with "Lorem ipsum dolor sit amet".
	pub start_with_lorem: bool,
}

impl GenerationParameters {
	pub fn new(paragraphs: usize, min_words: usize, max_words: usize, start_with_lorem: bool) -> Self {
		Self { paragraphs, min_words, max_words, start_with_lorem }
	}

	/// Checks that `min_words <= max_words`.
	///
	/// # Errors
	/// Returns `LoremError::InvalidWordRange` carrying both values otherwise.
	pub fn validate_word_range(&self) -> Result<(), LoremError> {
		if self.min_words > self.max_words {
			return Err(LoremError::InvalidWordRange {
				min_words: self.min_words,
				max_words: self.max_words,
			});
		}
		Ok(())
	}

	/// Returns a copy with every field brought within `limits`.
	///
	/// Never fails: out-of-range values are moved to the nearest bound.
	pub fn clamped(&self, limits: &GenerationLimits) -> Self {
		let (min_words, max_words) = clamp_word_range(self.min_words, self.max_words, limits);
		Self {
			paragraphs: clamp_paragraphs(self.paragraphs, limits),
			min_words,
			max_words,
			start_with_lorem: self.start_with_lorem,
		}
	}
}

impl Default for GenerationParameters {
	fn default() -> Self {
		Self {
			paragraphs: DEFAULT_PARAGRAPHS,
			min_words: DEFAULT_MIN_WORDS,
			max_words: DEFAULT_MAX_WORDS,
			start_with_lorem: DEFAULT_START_WITH_LOREM,
		}
	}
}

/// Brings a paragraph count into `[1, max_paragraphs]`.
pub fn clamp_paragraphs(paragraphs: usize, limits: &GenerationLimits) -> usize {
	paragraphs.min(limits.max_paragraphs()).max(1)
}

/// Brings a word range within `limits`.
///
/// # Behavior
/// - `max_words` is capped at `max_words_per_paragraph` and raised to 1
/// - `min_words` is raised to 1, then lowered to `max_words` if above it
pub fn clamp_word_range(min_words: usize, max_words: usize, limits: &GenerationLimits) -> (usize, usize) {
	let max_words = max_words.min(limits.max_words_per_paragraph()).max(1);
	let min_words = min_words.max(1).min(max_words);
	(min_words, max_words)
}
