use std::env;

use crate::common::ConfigError;
use crate::models::Locale;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub static_dir: String,
    pub default_locale: Locale,
    pub admin_token: Option<String>,
    pub image_engine_url: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the process environment, loading `.env`
    /// first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let default_locale = match get("DEFAULT_LOCALE") {
            Some(code) => code.parse().map_err(|reason| ConfigError::Invalid {
                name: "DEFAULT_LOCALE",
                reason,
            })?,
            None => Locale::default(),
        };

        Ok(Self {
            database_url,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "./static".to_string()),
            default_locale,
            admin_token: get("ADMIN_TOKEN"),
            image_engine_url: get("IMAGE_ENGINE_URL").map(|u| u.trim_end_matches('/').to_string()),
        })
    }
}
