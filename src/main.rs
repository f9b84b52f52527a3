mod web;

use std::io;
use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing::{info, warn};

use dunepress::common::AppConfig;
use dunepress::db::Database;
use dunepress::sections::SectionRegistry;
use dunepress::services::ImageEngineClient;

use crate::web::security::RateLimiter;
use crate::web::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let db = Database::new(&config.database_url)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let registry = SectionRegistry::with_builtins();
    info!(section_types = ?registry.tags(), "Section registry ready");

    if config.admin_token.is_none() {
        warn!("ADMIN_TOKEN is not set; the admin API is disabled");
    }

    let image_engine = config.image_engine_url.as_deref().map(ImageEngineClient::new);
    if image_engine.is_none() {
        warn!("IMAGE_ENGINE_URL is not set; image engine endpoints will return 503");
    }

    let bind_addr = config.bind_addr.clone();
    let static_dir = config.static_dir.clone();

    let state = Data::new(AppState {
        pool: db.pool,
        config: Arc::new(config),
        registry: Arc::new(registry),
        rate_limiter: Arc::new(RateLimiter::new()),
        image_engine,
    });

    info!(%bind_addr, "Starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
            .configure(web::handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
