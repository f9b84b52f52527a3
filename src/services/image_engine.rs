//! Client for the image-generation service behind the admin console.
//!
//! Every call is a single request. Failures are returned to the caller, who
//! decides whether to retry; nothing here retries on its own.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::ImageEngineError;
use crate::models::{
    GenerateImageRequest, GeneratedImage, ImageFilters, ImageLibraryPage, ImageRating, ImageStats,
    KeywordCatalog,
};

const API_PREFIX: &str = "/api/image-engine";

#[derive(Serialize)]
struct RateBody {
    rating: ImageRating,
}

#[derive(Serialize)]
struct ApproveBody {
    approved: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: String,
}

#[derive(Clone, Debug)]
pub struct ImageEngineClient {
    http: Client,
    base_url: String,
}

impl ImageEngineClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.endpoint(path))
    }

    pub async fn generate(&self, req: &GenerateImageRequest) -> Result<GeneratedImage, ImageEngineError> {
        debug!(topic = %req.topic, image_type = %req.image_type, "Requesting image generation");
        let resp = self.request(Method::POST, "/generate").json(req).send().await?;
        json_or_error(resp).await
    }

    pub async fn rate(&self, id: &str, rating: ImageRating) -> Result<GeneratedImage, ImageEngineError> {
        let resp = self
            .request(Method::PATCH, &format!("/library/{id}/rate"))
            .json(&RateBody { rating })
            .send()
            .await?;
        json_or_error(resp).await
    }

    pub async fn approve(&self, id: &str, approved: bool) -> Result<GeneratedImage, ImageEngineError> {
        let resp = self
            .request(Method::PATCH, &format!("/library/{id}/approve"))
            .json(&ApproveBody { approved })
            .send()
            .await?;
        json_or_error(resp).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ImageEngineError> {
        let resp = self
            .request(Method::DELETE, &format!("/library/{id}"))
            .send()
            .await?;
        check_status(resp).await.map(|_| ())
    }

    pub async fn list(&self, filters: &ImageFilters) -> Result<ImageLibraryPage, ImageEngineError> {
        let resp = self
            .request(Method::GET, "/library")
            .query(&filters.query_pairs())
            .send()
            .await?;
        json_or_error(resp).await
    }

    pub async fn stats(&self) -> Result<ImageStats, ImageEngineError> {
        let resp = self.request(Method::GET, "/stats").send().await?;
        json_or_error(resp).await
    }

    pub async fn keywords(&self) -> Result<KeywordCatalog, ImageEngineError> {
        let resp = self.request(Method::GET, "/keywords").send().await?;
        json_or_error(resp).await
    }

    /// Topic suggestions matching `query`.
    pub async fn search_keywords(&self, query: &str) -> Result<Vec<String>, ImageEngineError> {
        let resp = self
            .request(Method::GET, "/keywords/search")
            .query(&[("q", query)])
            .send()
            .await?;
        json_or_error(resp).await
    }
}

async fn check_status(resp: Response) -> Result<Response, ImageEngineError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    warn!(status = status.as_u16(), %message, "Image engine request failed");

    Err(ImageEngineError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn json_or_error<T: DeserializeOwned>(resp: Response) -> Result<T, ImageEngineError> {
    Ok(check_status(resp).await?.json::<T>().await?)
}

/// Extracts `{"error": "..."}` / `{"message": "..."}`, falling back to a
/// short plain-text body.
fn error_message(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return Some(parsed.error);
    }
    let trimmed = body.trim();
    (!trimmed.is_empty() && trimmed.len() <= 200 && !trimmed.starts_with('<'))
        .then(|| trimmed.to_string())
}
