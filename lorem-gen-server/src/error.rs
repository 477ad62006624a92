use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use lorem_gen_core::LoremError;

use crate::schema::ErrorResponse;

/// Errors surfaced to HTTP callers.
///
/// Every variant renders as `{"detail": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	/// Word range rejected by the generator's validator.
	#[error(transparent)]
	Validation(#[from] LoremError),

	/// A request field is outside its schema bounds.
	#[error("{field}: {reason} (got {value})")]
	OutOfBounds {
		field: &'static str,
		reason: String,
		value: i64,
	},

	/// The JSON body could not be read or decoded.
	#[error("invalid request body: {0}")]
	InvalidBody(String),

	/// The query string could not be decoded.
	#[error("invalid query parameters: {0}")]
	InvalidQuery(String),

	#[error("Not Found")]
	NotFound,
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::NotFound => StatusCode::NOT_FOUND,
			_ => StatusCode::BAD_REQUEST,
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(ErrorResponse { detail: self.to_string() })
	}
}
