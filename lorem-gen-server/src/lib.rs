//! HTTP service exposing the Lorem Ipsum generator.
//!
//! Routes are registered through [`configure`] so the binary and the
//! integration tests build the exact same application.

use actix_cors::Cors;
use actix_web::web;
use lorem_gen_core::LoremGenerator;

pub mod docs;
pub mod error;
pub mod routes;
pub mod schema;
pub mod settings;

use error::ApiError;

/// State shared by every worker.
///
/// Read-only after startup, so no lock is needed.
#[derive(Debug)]
pub struct SharedData {
	pub generator: LoremGenerator,
	pub environment: String,
}

impl SharedData {
	pub fn new(generator: LoremGenerator, environment: impl Into<String>) -> Self {
		Self { generator, environment: environment.into() }
	}
}

/// Registers extractor configuration, every route and the fallback handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(
		web::JsonConfig::default()
			.error_handler(|err, _req| ApiError::InvalidBody(err.to_string()).into()),
	)
	.app_data(
		web::QueryConfig::default()
			.error_handler(|err, _req| ApiError::InvalidQuery(err.to_string()).into()),
	)
	.service(routes::root)
	.service(routes::health)
	.service(docs::openapi_json)
	.service(docs::swagger_ui)
	.service(docs::redoc)
	.service(
		web::scope("/api/v1/lorem")
			.service(routes::post_generate)
			.service(routes::get_generate),
	)
	.default_service(web::to(routes::not_found));
}

/// Builds the CORS middleware from the configured origin list.
///
/// `"*"` allows any origin. Methods and headers are unrestricted and
/// credentials are allowed.
pub fn build_cors(origins: &[String]) -> Cors {
	let mut cors = Cors::default()
		.allow_any_method()
		.allow_any_header()
		.supports_credentials();
	for origin in origins {
		cors = if origin == "*" {
			cors.allow_any_origin()
		} else {
			cors.allowed_origin(origin)
		};
	}
	cors
}
