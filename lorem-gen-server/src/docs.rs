//! Interactive API documentation.
//!
//! `/openapi.json` describes the service using the configured limits;
//! `/docs` (Swagger UI) and `/redoc` render it from a CDN.

use actix_web::{get, web, HttpResponse, Responder};
use lorem_gen_core::model::generation_parameters::{
	DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, DEFAULT_PARAGRAPHS, DEFAULT_START_WITH_LOREM,
};
use lorem_gen_core::GenerationLimits;
use serde_json::{json, Value};

use crate::schema::MIN_MAX_WORDS;
use crate::SharedData;

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Lorem Ipsum API - Swagger UI</title>
<link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
</script>
</body>
</html>
"##;

const REDOC_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Lorem Ipsum API - ReDoc</title>
</head>
<body>
<redoc spec-url="/openapi.json"></redoc>
<script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
</body>
</html>
"#;

/// Builds the OpenAPI 3 document for the service.
pub fn openapi_document(limits: &GenerationLimits) -> Value {
	let max_paragraphs = limits.max_paragraphs();
	let max_words = limits.max_words_per_paragraph();

	let parameter = |name: &str, schema: Value, description: &str| {
		json!({ "name": name, "in": "query", "required": false, "schema": schema, "description": description })
	};
	let generate_responses = json!({
		"200": {
			"description": "Generated text",
			"content": { "application/json": { "schema": { "$ref": "#/components/schemas/LoremIpsumResponse" } } }
		},
		"400": {
			"description": "Invalid parameters",
			"content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } }
		}
	});

	json!({
		"openapi": "3.0.3",
		"info": {
			"title": "Lorem Ipsum API",
			"description": "Customizable Lorem Ipsum text generation",
			"version": env!("CARGO_PKG_VERSION")
		},
		"paths": {
			"/api/v1/lorem/generate": {
				"post": {
					"tags": ["lorem-ipsum"],
					"summary": "Generate Lorem Ipsum text",
					"requestBody": {
						"required": true,
						"content": { "application/json": { "schema": { "$ref": "#/components/schemas/LoremIpsumRequest" } } }
					},
					"responses": generate_responses.clone()
				},
				"get": {
					"tags": ["lorem-ipsum"],
					"summary": "Generate Lorem Ipsum text (GET)",
					"parameters": [
						parameter("paragraphs", json!({ "type": "integer", "minimum": 1, "default": DEFAULT_PARAGRAPHS }),
							&format!("Number of paragraphs, values above {max_paragraphs} are capped")),
						parameter("min_words", json!({ "type": "integer", "minimum": 1, "default": DEFAULT_MIN_WORDS }),
							"Minimum words per paragraph"),
						parameter("max_words", json!({ "type": "integer", "minimum": MIN_MAX_WORDS, "maximum": max_words, "default": DEFAULT_MAX_WORDS }),
							"Maximum words per paragraph"),
						parameter("start_with_lorem", json!({ "type": "boolean", "default": DEFAULT_START_WITH_LOREM }),
							"Start the first paragraph with 'Lorem ipsum dolor sit amet'")
					],
					"responses": generate_responses
				}
			},
			"/health": {
				"get": {
					"tags": ["health"],
					"summary": "Service health",
					"responses": {
						"200": {
							"description": "Service is up",
							"content": { "application/json": { "schema": { "$ref": "#/components/schemas/HealthResponse" } } }
						}
					}
				}
			}
		},
		"components": {
			"schemas": {
				"LoremIpsumRequest": {
					"type": "object",
					"properties": {
						"paragraphs": { "type": "integer", "minimum": 1, "default": DEFAULT_PARAGRAPHS },
						"min_words": { "type": "integer", "minimum": 1, "default": DEFAULT_MIN_WORDS },
						"max_words": { "type": "integer", "minimum": MIN_MAX_WORDS, "maximum": max_words, "default": DEFAULT_MAX_WORDS },
						"start_with_lorem": { "type": "boolean", "default": DEFAULT_START_WITH_LOREM }
					}
				},
				"LoremIpsumResponse": {
					"type": "object",
					"required": ["text", "paragraphs", "total_words"],
					"properties": {
						"text": { "type": "string" },
						"paragraphs": { "type": "integer" },
						"total_words": { "type": "integer" }
					}
				},
				"ErrorResponse": {
					"type": "object",
					"required": ["detail"],
					"properties": { "detail": { "type": "string" } }
				},
				"HealthResponse": {
					"type": "object",
					"required": ["status", "version", "environment"],
					"properties": {
						"status": { "type": "string" },
						"version": { "type": "string" },
						"environment": { "type": "string" }
					}
				}
			}
		}
	})
}

#[get("/openapi.json")]
pub async fn openapi_json(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().json(openapi_document(data.generator.limits()))
}

#[get("/docs")]
pub async fn swagger_ui() -> impl Responder {
	HttpResponse::Ok().content_type("text/html; charset=utf-8").body(SWAGGER_UI_PAGE)
}

#[get("/redoc")]
pub async fn redoc() -> impl Responder {
	HttpResponse::Ok().content_type("text/html; charset=utf-8").body(REDOC_PAGE)
}
