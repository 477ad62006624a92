use serde::{Deserialize, Serialize};

use crate::error::LoremError;

/// Default maximum number of paragraphs per request.
pub const DEFAULT_MAX_PARAGRAPHS: usize = 10;

/// Default maximum number of words in a single paragraph.
pub const DEFAULT_MAX_WORDS_PER_PARAGRAPH: usize = 100;

/// Process-wide generation bounds.
///
/// Built once at startup and handed to the generator (and, through it, to the
/// request handlers). Never mutated afterwards.
///
/// # Invariants
/// - Both limits are strictly positive
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationLimits {
	/// Upper bound applied to the paragraph count.
	max_paragraphs: usize,
	/// Upper bound applied to the per-paragraph maximum word count.
	max_words_per_paragraph: usize,
}

impl GenerationLimits {
	/// Creates a new set of limits.
	///
	/// # Errors
	/// Returns `LoremError::InvalidLimits` if either bound is zero.
	pub fn new(max_paragraphs: usize, max_words_per_paragraph: usize) -> Result<Self, LoremError> {
		if max_paragraphs == 0 {
			return Err(LoremError::InvalidLimits("max_paragraphs must be at least 1".to_owned()));
		}
		if max_words_per_paragraph == 0 {
			return Err(LoremError::InvalidLimits("max_words_per_paragraph must be at least 1".to_owned()));
		}
		Ok(Self { max_paragraphs, max_words_per_paragraph })
	}

	pub fn max_paragraphs(&self) -> usize {
		self.max_paragraphs
	}

	pub fn max_words_per_paragraph(&self) -> usize {
		self.max_words_per_paragraph
	}
}

impl Default for GenerationLimits {
	fn default() -> Self {
		Self {
			max_paragraphs: DEFAULT_MAX_PARAGRAPHS,
			max_words_per_paragraph: DEFAULT_MAX_WORDS_PER_PARAGRAPH,
		}
	}
}
