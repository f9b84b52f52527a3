use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::Notice;

/// Error body returned by the JSON API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// New display order for a page's sections.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub ordered_ids: Vec<Uuid>,
}

/// Outcome of an image-engine action: the updated record (if any) plus the
/// notice to show the editor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    pub notice: Notice,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RatingRequest {
    pub rating: crate::models::ImageRating,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApprovalRequest {
    pub approved: bool,
}

/// Body of the newsletter signup form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
    pub locale: Option<String>,
    pub section_id: Option<String>,
}
