//! Lorem Ipsum text generation library.
//!
//! This crate provides the placeholder text generator behind the HTTP service:
//! - A fixed sampling vocabulary
//! - Generation limits and request parameters with clamping rules
//! - Paragraph and text generation with an injectable random source
//!
//! The HTTP layer lives in `lorem-gen-server`; nothing here performs I/O.

/// Generation limits shared by the validator and the generator.
pub mod config;

/// Error types returned by validation and vocabulary construction.
pub mod error;

/// Vocabulary, parameters and the generator itself.
///
/// This module exposes the high-level generator interface.
pub mod model;

pub use config::GenerationLimits;
pub use error::LoremError;
pub use model::generated_text::GeneratedText;
pub use model::generation_parameters::GenerationParameters;
pub use model::generator::LoremGenerator;
pub use model::vocabulary::Vocabulary;
