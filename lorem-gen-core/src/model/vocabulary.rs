use std::sync::Arc;

use rand::Rng;

use crate::error::LoremError;

/// Words sampled by the default vocabulary.
pub const BASE_WORDS: [&str; 19] = [
	"lorem", "ipsum", "dolor", "sit", "amet", "consectetur",
	"adipiscing", "elit", "sed", "do", "eiusmod", "tempor",
	"incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
];

/// Fixed pool of lowercase words used for uniform random sampling.
///
/// Cloning is cheap: the words are shared behind an `Arc`.
///
/// ## Invariants
/// - The pool is never empty
/// - Every word is non-empty, lowercase and free of whitespace
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
	words: Arc<[String]>,
}

impl Vocabulary {
	/// Builds a vocabulary from caller-supplied words, keeping their order.
	///
	/// # Errors
	/// Returns `LoremError::InvalidVocabulary` if the list is empty or if a word
	/// is empty, contains whitespace, or has uppercase characters.
	pub fn new<I, S>(words: I) -> Result<Self, LoremError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let words: Vec<String> = words.into_iter().map(Into::into).collect();
		if words.is_empty() {
			return Err(LoremError::InvalidVocabulary("vocabulary cannot be empty".to_owned()));
		}
		for word in &words {
			if word.is_empty() || word.chars().any(char::is_whitespace) {
				return Err(LoremError::InvalidVocabulary(format!("'{word}' is not a single word")));
			}
			if word.chars().any(char::is_uppercase) {
				return Err(LoremError::InvalidVocabulary(format!("'{word}' is not lowercase")));
			}
		}
		Ok(Self { words: words.into() })
	}

	/// Number of words in the pool.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Always `false`; kept for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Read-only view of the pool, in insertion order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Draws one word uniformly at random.
	pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
		&self.words[rng.random_range(0..self.words.len())]
	}

	/// Draws `count` words independently, with replacement.
	pub fn random_words<'a, R: Rng + ?Sized>(&'a self, count: usize, rng: &mut R) -> Vec<&'a str> {
		(0..count).map(|_| self.random_word(&mut *rng)).collect()
	}

	/// Returns `true` if `word` belongs to the pool.
	pub fn contains(&self, word: &str) -> bool {
		self.words.iter().any(|w| w == word)
	}
}

impl Default for Vocabulary {
	fn default() -> Self {
		Self { words: BASE_WORDS.iter().map(|w| (*w).to_owned()).collect() }
	}
}
