use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{debug, warn};

use crate::error::ApiError;
use crate::schema::{HealthResponse, LoremRequest};
use crate::SharedData;

/// HTTP POST endpoint `/api/v1/lorem/generate`
///
/// Generates text from a JSON body. Missing fields take their defaults.
#[post("/generate")]
pub async fn post_generate(
	data: web::Data<SharedData>,
	body: web::Json<LoremRequest>,
) -> Result<HttpResponse, ApiError> {
	generate(&data, body.into_inner())
}

/// HTTP GET endpoint `/api/v1/lorem/generate`
///
/// Same as the POST variant, with the fields passed as query parameters.
#[get("/generate")]
pub async fn get_generate(
	data: web::Data<SharedData>,
	query: web::Query<LoremRequest>,
) -> Result<HttpResponse, ApiError> {
	generate(&data, query.into_inner())
}

/// Shared generation path for both verbs.
///
/// Schema bounds first, then the word-range check on the raw values, then
/// generation with clamping.
fn generate(data: &SharedData, request: LoremRequest) -> Result<HttpResponse, ApiError> {
	debug!("Generation request: {request:?}");

	let result = request
		.into_parameters(data.generator.limits())
		.and_then(|params| data.generator.generate(&params, &mut rand::rng()).map_err(ApiError::from));

	match result {
		Ok(generated) => Ok(HttpResponse::Ok().json(generated)),
		Err(e) => {
			warn!("Rejected generation request {request:?}: {e}");
			Err(e)
		}
	}
}

#[get("/health")]
pub async fn health(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().json(HealthResponse {
		status: "ok".to_owned(),
		version: env!("CARGO_PKG_VERSION").to_owned(),
		environment: data.environment.clone(),
	})
}

/// Sends visitors of `/` to the interactive documentation.
#[get("/")]
pub async fn root() -> impl Responder {
	HttpResponse::TemporaryRedirect()
		.insert_header((header::LOCATION, "/docs"))
		.finish()
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
	Err(ApiError::NotFound)
}
