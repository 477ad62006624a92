use actix_web::http::Uri;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use lorem_gen_core::config::{DEFAULT_MAX_PARAGRAPHS, DEFAULT_MAX_WORDS_PER_PARAGRAPH};
use lorem_gen_core::{GenerationLimits, LoremError};

use crate::schema::MIN_MAX_WORDS;

/// CORS origins allowed when `CORS_ORIGINS_STR` is not set.
pub const DEFAULT_CORS_ORIGINS: &str = r#"["http://localhost:3000","http://localhost:8000"]"#;

/// Errors raised while turning settings into runtime configuration.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("CORS_ORIGINS_STR must be a JSON list of strings: {0}")]
	InvalidCorsOrigins(#[from] serde_json::Error),

	#[error("'{0}' is not a valid CORS origin, expected scheme://host[:port] or \"*\"")]
	InvalidCorsOrigin(String),

	#[error(transparent)]
	InvalidLimits(#[from] LoremError),

	#[error("max words per paragraph must be at least 5, got {0}")]
	MaxWordsTooSmall(usize),
}

/// Server settings, read once at startup.
///
/// Every field can be given as a flag or through its environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "lorem-gen-server", version, about = "HTTP API generating Lorem Ipsum text")]
pub struct ServerSettings {
	/// Interface to bind
	#[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
	pub host: String,

	/// Port to bind
	#[arg(long, env = "API_PORT", default_value_t = 8000)]
	pub port: u16,

	/// Auto-reload flag, accepted for compatibility; has no effect
	#[arg(long, env = "API_RELOAD", default_value_t = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
	pub reload: bool,

	/// Verbose logging
	#[arg(long, env = "DEBUG", default_value_t = false, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
	pub debug: bool,

	/// Deployment environment name, reported by /health
	#[arg(long, env = "ENVIRONMENT", default_value = "local")]
	pub environment: String,

	/// JSON list of allowed CORS origins
	#[arg(long = "cors-origins", env = "CORS_ORIGINS_STR", default_value = DEFAULT_CORS_ORIGINS)]
	pub cors_origins: String,

	/// Maximum paragraphs per request
	#[arg(long, env = "LOREM_MAX_PARAGRAPHS", default_value_t = DEFAULT_MAX_PARAGRAPHS)]
	pub max_paragraphs: usize,

	/// Maximum words per paragraph
	#[arg(long, env = "LOREM_MAX_WORDS_PER_PARAGRAPH", default_value_t = DEFAULT_MAX_WORDS_PER_PARAGRAPH)]
	pub max_words_per_paragraph: usize,

	/// Worker threads (0 = one per physical core)
	#[arg(long, env = "LOREM_WORKERS", default_value_t = 0)]
	pub workers: usize,
}

impl ServerSettings {
	/// Decodes the CORS origin list.
	///
	/// # Errors
	/// - The value is not a JSON list of strings
	/// - An entry other than `"*"` is not an absolute `scheme://host[:port]` origin
	pub fn cors_origins(&self) -> Result<Vec<String>, SettingsError> {
		let origins: Vec<String> = serde_json::from_str(&self.cors_origins)?;
		for origin in &origins {
			if origin != "*" && !is_valid_origin(origin) {
				return Err(SettingsError::InvalidCorsOrigin(origin.clone()));
			}
		}
		Ok(origins)
	}

	/// `true` when running in the `production` environment (case-insensitive).
	pub fn is_production(&self) -> bool {
		self.environment.eq_ignore_ascii_case("production")
	}

	/// Generation limits derived from the settings.
	///
	/// # Errors
	/// - Either limit is zero
	/// - `max_words_per_paragraph` is below the smallest accepted `max_words`
	pub fn generation_limits(&self) -> Result<GenerationLimits, SettingsError> {
		let limits = GenerationLimits::new(self.max_paragraphs, self.max_words_per_paragraph)?;
		if self.max_words_per_paragraph < MIN_MAX_WORDS as usize {
			return Err(SettingsError::MaxWordsTooSmall(self.max_words_per_paragraph));
		}
		Ok(limits)
	}

	/// Default log filter when `RUST_LOG` is not set.
	pub fn log_level(&self) -> &'static str {
		if self.debug { "debug" } else { "info" }
	}
}

fn is_valid_origin(origin: &str) -> bool {
	match origin.parse::<Uri>() {
		Ok(uri) => uri.scheme().is_some() && uri.host().is_some_and(|h| !h.is_empty()),
		Err(_) => false,
	}
}
