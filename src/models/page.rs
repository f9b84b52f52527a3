use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{resolve, Locale};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub title_he: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn title_for(&self, locale: Locale) -> &str {
        resolve(locale, Some(self.title.as_str()), self.title_he.as_deref()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCreate {
    pub slug: String,
    pub title: String,
    pub title_he: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}
