/// Errors produced by the generation library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoremError {
	/// The requested minimum word count exceeds the maximum.
	#[error("the minimum word count ({min_words}) cannot be greater than the maximum ({max_words})")]
	InvalidWordRange { min_words: usize, max_words: usize },

	/// A vocabulary could not be built from the supplied words.
	#[error("invalid vocabulary: {0}")]
	InvalidVocabulary(String),

	/// Generation limits are out of range.
	#[error("invalid generation limits: {0}")]
	InvalidLimits(String),
}
