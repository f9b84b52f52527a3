use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NewsletterSubscriber {
    pub id: Uuid,
    pub email: String,
    pub locale: String,
    pub source_section_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
