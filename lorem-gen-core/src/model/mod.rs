//! Top-level module for Lorem Ipsum generation.
//!
//! - The sampling pool (`Vocabulary`)
//! - Caller parameters and their validation/clamping (`GenerationParameters`)
//! - The generated output and its word counting (`GeneratedText`)
//! - A high-level generation interface (`LoremGenerator`)

/// High-level interface producing paragraphs and multi-paragraph text.
///
/// Exposes paragraph generation, text generation and the validated
/// `generate` entry point used by the server.
pub mod generator;

/// Caller-supplied parameters with defaults, validation and clamping.
pub mod generation_parameters;

/// Output of a generation request, with the independent word count.
pub mod generated_text;

/// Fixed, non-empty list of lowercase words used for uniform sampling.
pub mod vocabulary;
