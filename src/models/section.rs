use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One renderable block of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PageSection {
    pub id: Uuid,
    pub page_id: Uuid,
    pub section_type: String,
    pub sort_order: i32,
    pub is_visible: bool,
    pub title: Option<String>,
    pub title_he: Option<String>,
    pub subtitle: Option<String>,
    pub subtitle_he: Option<String>,
    pub description: Option<String>,
    pub description_he: Option<String>,
    pub button_text: Option<String>,
    pub button_text_he: Option<String>,
    pub button_link: Option<String>,
    pub data: Option<Value>,
    pub data_he: Option<Value>,
    pub images: Vec<String>,
    pub background_image: Option<String>,
    pub background_color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageSection {
    /// A visible section with no text, payload or images.
    pub fn new(page_id: Uuid, section_type: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            page_id,
            section_type: section_type.into(),
            sort_order: 0,
            is_visible: true,
            title: None,
            title_he: None,
            subtitle: None,
            subtitle_he: None,
            description: None,
            description_he: None,
            button_text: None,
            button_text_he: None,
            button_link: None,
            data: None,
            data_he: None,
            images: Vec::new(),
            background_image: None,
            background_color: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionCreate {
    pub section_type: String,
    pub sort_order: Option<i32>,
    pub is_visible: Option<bool>,
    pub title: Option<String>,
    pub title_he: Option<String>,
    pub subtitle: Option<String>,
    pub subtitle_he: Option<String>,
    pub description: Option<String>,
    pub description_he: Option<String>,
    pub button_text: Option<String>,
    pub button_text_he: Option<String>,
    pub button_link: Option<String>,
    pub data: Option<Value>,
    pub data_he: Option<Value>,
    pub images: Option<Vec<String>>,
    pub background_image: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionUpdate {
    pub section_type: Option<String>,
    pub sort_order: Option<i32>,
    pub is_visible: Option<bool>,
    pub title: Option<String>,
    pub title_he: Option<String>,
    pub subtitle: Option<String>,
    pub subtitle_he: Option<String>,
    pub description: Option<String>,
    pub description_he: Option<String>,
    pub button_text: Option<String>,
    pub button_text_he: Option<String>,
    pub button_link: Option<String>,
    pub data: Option<Value>,
    pub data_he: Option<Value>,
    pub images: Option<Vec<String>>,
    pub background_image: Option<String>,
    pub background_color: Option<String>,
}
