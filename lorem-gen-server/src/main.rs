use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::{info, warn};

use lorem_gen_core::{LoremGenerator, Vocabulary};
use lorem_gen_server::settings::ServerSettings;
use lorem_gen_server::{build_cors, configure, SharedData};

/// Main entry point for the server.
///
/// Reads the settings once, builds the generator, and starts an Actix-web
/// HTTP server with CORS and request logging.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	let settings = ServerSettings::parse();

	// RUST_LOG wins over the DEBUG flag
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(settings.log_level())).init();

	let limits = settings.generation_limits()?;
	let origins = settings.cors_origins()?;

	if settings.reload {
		warn!("API_RELOAD is set but auto-reload is not supported, restart the process to apply changes");
	}

	let shared_data = web::Data::new(SharedData::new(
		LoremGenerator::new(Vocabulary::default(), limits),
		settings.environment.clone(),
	));

	info!(
		"Starting Lorem Ipsum API on {}:{} (environment: {}, production: {}, max paragraphs: {}, max words per paragraph: {})",
		settings.host,
		settings.port,
		settings.environment,
		settings.is_production(),
		limits.max_paragraphs(),
		limits.max_words_per_paragraph(),
	);
	info!("Allowed CORS origins: {origins:?}");

	let mut server = HttpServer::new(move || {
		App::new()
			.wrap(build_cors(&origins))
			.wrap(Logger::default())
			.app_data(shared_data.clone())
			.configure(configure)
	});
	if settings.workers > 0 {
		server = server.workers(settings.workers);
	}

	server
		.bind((settings.host.as_str(), settings.port))?
		.run()
		.await?;

	Ok(())
}
