use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// A section payload that does not match the shape its renderer expects.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("payload must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("payload does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("item {index} does not match the expected shape: {reason}")]
    InvalidItem { index: usize, reason: String },
}

#[derive(Error, Debug)]
pub enum SectionError {
    #[error("Unknown section type: {0}")]
    UnknownType(String),

    #[error("Invalid payload for {section_type} section: {source}")]
    InvalidPayload {
        section_type: String,
        #[source]
        source: PayloadError,
    },

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Error, Debug)]
pub enum ImageEngineError {
    #[error("Image engine is not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Image engine returned {status}: {message}")]
    Status { status: u16, message: String },
}
