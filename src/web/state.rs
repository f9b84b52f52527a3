use sqlx::PgPool;
use std::sync::Arc;

use dunepress::common::AppConfig;
use dunepress::sections::SectionRegistry;
use dunepress::services::ImageEngineClient;

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
    pub registry: Arc<SectionRegistry>,
    pub rate_limiter: Arc<RateLimiter>,
    pub image_engine: Option<ImageEngineClient>,
}
