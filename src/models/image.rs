use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editorial verdict on a generated image.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageRating {
    Like,
    Dislike,
    Skip,
}

impl ImageRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::Skip => "skip",
        }
    }
}

impl std::str::FromStr for ImageRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            "skip" => Ok(Self::Skip),
            _ => Err(format!("invalid image rating: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub topic: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_type: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub rating: Option<ImageRating>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    pub topic: String,
    pub image_type: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

/// Library listing filters. `None` fields are left out of the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub rating: Option<ImageRating>,
    pub page: Option<u32>,
}

impl ImageFilters {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty() && *c != "all") {
            pairs.push(("category", category.to_string()));
        }
        if let Some(rating) = self.rating {
            pairs.push(("rating", rating.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLibraryPage {
    pub images: Vec<GeneratedImage>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStats {
    pub total: u64,
    pub approved: u64,
    pub liked: u64,
    pub disliked: u64,
    #[serde(default)]
    pub by_category: Vec<CategoryCount>,
    #[serde(default)]
    pub top_topics: Vec<TopicCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryKeywords {
    pub topics: Vec<String>,
    pub image_types: Vec<String>,
}

/// Topics and image types the engine knows how to generate, per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeywordCatalog {
    pub categories: BTreeMap<String, CategoryKeywords>,
    pub all_topics: Vec<String>,
    pub image_types: Vec<String>,
}
