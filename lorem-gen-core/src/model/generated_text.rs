use serde::{Deserialize, Serialize};

/// Separator placed between two paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Result of a generation request.
///
/// `total_words` is recomputed from `text` rather than accumulated while
/// generating, so it always reflects what the caller actually receives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GeneratedText {
	/// Paragraphs joined by `PARAGRAPH_SEPARATOR`.
	pub text: String,
	/// Number of paragraphs generated.
	pub paragraphs: usize,
	/// Whitespace-delimited tokens across all paragraphs.
	pub total_words: usize,
}

impl GeneratedText {
	/// Wraps generated text, counting its words.
	pub fn new(text: String, paragraphs: usize) -> Self {
		let total_words = count_words(&text);
		Self { text, paragraphs, total_words }
	}

	/// Iterates over the individual paragraphs.
	pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
		self.text.split(PARAGRAPH_SEPARATOR)
	}
}

/// Counts words by splitting on the paragraph separator, then on whitespace.
pub fn count_words(text: &str) -> usize {
	text.split(PARAGRAPH_SEPARATOR)
		.map(|paragraph| paragraph.split_whitespace().count())
		.sum()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_words_across_paragraphs() {
		assert_eq!(count_words("Lorem ipsum dolor sit amet."), 5);
		assert_eq!(count_words("Sed do.\n\nUt.\n\nMagna aliqua et."), 6);
		assert_eq!(count_words(""), 0);
	}

	#[test]
	fn new_computes_total_words() {
		let generated = GeneratedText::new("Elit sed.\n\nTempor.".to_owned(), 2);
		assert_eq!(generated.total_words, 3);
		assert_eq!(generated.paragraphs().collect::<Vec<_>>(), vec!["Elit sed.", "Tempor."]);
	}
}
