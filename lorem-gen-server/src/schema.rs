use lorem_gen_core::model::generation_parameters::{
	DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, DEFAULT_PARAGRAPHS, DEFAULT_START_WITH_LOREM,
};
use lorem_gen_core::{GenerationLimits, GenerationParameters};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Smallest accepted `max_words`, the length of the "Lorem ipsum dolor sit amet" anchor.
pub const MIN_MAX_WORDS: i64 = 5;

/// Request accepted by `/api/v1/lorem/generate`, from a JSON body or a query string.
///
/// Fields are signed so that negative values reach `into_parameters` and get
/// a bounds message instead of a decoding error.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoremRequest {
	#[serde(default = "default_paragraphs")]
	pub paragraphs: i64,
	#[serde(default = "default_min_words")]
	pub min_words: i64,
	#[serde(default = "default_max_words")]
	pub max_words: i64,
	#[serde(default = "default_start_with_lorem", deserialize_with = "deserialize_lenient_bool")]
	pub start_with_lorem: bool,
}

fn default_paragraphs() -> i64 {
	DEFAULT_PARAGRAPHS as i64
}

fn default_min_words() -> i64 {
	DEFAULT_MIN_WORDS as i64
}

fn default_max_words() -> i64 {
	DEFAULT_MAX_WORDS as i64
}

fn default_start_with_lorem() -> bool {
	DEFAULT_START_WITH_LOREM
}

/// Boolean as it may arrive from JSON or a query string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientBool {
	Bool(bool),
	Int(i64),
	Text(String),
}

/// Accepts `true`/`false`, `1`/`0`, and the case-insensitive words
/// `t`/`f`, `y`/`n`, `yes`/`no`, `on`/`off`, `true`/`false`.
fn deserialize_lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
	match LenientBool::deserialize(deserializer)? {
		LenientBool::Bool(value) => Ok(value),
		LenientBool::Int(1) => Ok(true),
		LenientBool::Int(0) => Ok(false),
		LenientBool::Int(other) => Err(D::Error::custom(format!("'{other}' is not a valid boolean"))),
		LenientBool::Text(text) => parse_bool(&text)
			.ok_or_else(|| D::Error::custom(format!("'{text}' is not a valid boolean"))),
	}
}

fn parse_bool(text: &str) -> Option<bool> {
	match text.trim().to_ascii_lowercase().as_str() {
		"1" | "t" | "true" | "y" | "yes" | "on" => Some(true),
		"0" | "f" | "false" | "n" | "no" | "off" => Some(false),
		_ => None,
	}
}

impl Default for LoremRequest {
	fn default() -> Self {
		Self {
			paragraphs: default_paragraphs(),
			min_words: default_min_words(),
			max_words: default_max_words(),
			start_with_lorem: default_start_with_lorem(),
		}
	}
}

impl LoremRequest {
	/// Applies the schema bounds and converts to generator parameters.
	///
	/// # Bounds
	/// - `paragraphs >= 1` (values above the maximum are clamped later, not rejected)
	/// - `min_words >= 1`
	/// - `5 <= max_words <= max_words_per_paragraph`
	///
	/// The word range itself (`min_words <= max_words`) is left to the generator.
	pub fn into_parameters(self, limits: &GenerationLimits) -> Result<GenerationParameters, ApiError> {
		let max_allowed = i64::try_from(limits.max_words_per_paragraph()).unwrap_or(i64::MAX);

		let paragraphs = at_least("paragraphs", self.paragraphs, 1)?;
		let min_words = at_least("min_words", self.min_words, 1)?;
		let max_words = at_least("max_words", self.max_words, MIN_MAX_WORDS)?;
		if self.max_words > max_allowed {
			return Err(ApiError::OutOfBounds {
				field: "max_words",
				reason: format!("the maximum number of words per paragraph is {max_allowed}"),
				value: self.max_words,
			});
		}

		Ok(GenerationParameters::new(paragraphs, min_words, max_words, self.start_with_lorem))
	}
}

fn at_least(field: &'static str, value: i64, bound: i64) -> Result<usize, ApiError> {
	if value < bound {
		return Err(ApiError::OutOfBounds {
			field,
			reason: format!("must be greater than or equal to {bound}"),
			value,
		});
	}
	usize::try_from(value).map_err(|_| ApiError::OutOfBounds {
		field,
		reason: "value is too large".to_owned(),
		value,
	})
}

/// Body of every 4xx response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
	pub detail: String,
}

/// Body of `GET /health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
	pub status: String,
	pub version: String,
	pub environment: String,
}
