use actix_web::http::StatusCode;
use actix_web::{delete, get, patch, post, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;

use dunepress::common::ImageEngineError;
use dunepress::models::{GenerateImageRequest, ImageFilters, ImageRating};
use dunepress::services::{ImageEngineClient, Notice};
use dunepress::types::{ActionResponse, ApprovalRequest, RatingRequest};

use crate::web::helpers::{json_error, require_admin};
use crate::web::state::AppState;

const MIN_KEYWORD_QUERY: usize = 3;

fn engine(state: &AppState) -> Result<&ImageEngineClient, HttpResponse> {
    state.image_engine.as_ref().ok_or_else(|| {
        json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            ImageEngineError::NotConfigured.to_string(),
        )
    })
}

fn respond<T: Serialize>(
    outcome: Result<T, ImageEngineError>,
    success: &str,
    failure: &str,
) -> HttpResponse {
    match outcome {
        Ok(result) => HttpResponse::Ok().json(ActionResponse {
            result: Some(result),
            notice: Notice::success(success),
        }),
        Err(e) => HttpResponse::BadGateway().json(ActionResponse::<T> {
            result: None,
            notice: Notice::failure(failure, e.to_string()),
        }),
    }
}

fn rating_notice(rating: ImageRating) -> &'static str {
    match rating {
        ImageRating::Like => "Image liked",
        ImageRating::Dislike => "Image disliked",
        ImageRating::Skip => "Image skipped",
    }
}

#[post("/admin/api/images/generate")]
pub async fn image_generate(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<GenerateImageRequest>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }
    let client = match engine(&state) {
        Ok(client) => client,
        Err(resp) => return resp,
    };

    if body.topic.trim().is_empty() {
        return json_error(StatusCode::UNPROCESSABLE_ENTITY, "Topic is required");
    }

    let outcome = client.generate(&body).await;
    if let Ok(image) = &outcome {
        info!(image_id = %image.id, topic = %image.topic, "Image generated");
    }
    respond(outcome, "Image generated", "Generation failed")
}

#[patch("/admin/api/images/library/{id}/rate")]
pub async fn image_rate(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<RatingRequest>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }
    let client = match engine(&state) {
        Ok(client) => client,
        Err(resp) => return resp,
    };

    let outcome = client.rate(&path, body.rating).await;
    respond(outcome, rating_notice(body.rating), "Rating failed")
}

#[patch("/admin/api/images/library/{id}/approve")]
pub async fn image_approve(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<ApprovalRequest>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }
    let client = match engine(&state) {
        Ok(client) => client,
        Err(resp) => return resp,
    };

    let outcome = client.approve(&path, body.approved).await;
    let success = if body.approved { "Image approved" } else { "Approval removed" };
    respond(outcome, success, "Approval failed")
}

#[delete("/admin/api/images/library/{id}")]
pub async fn image_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }
    let client = match engine(&state) {
        Ok(client) => client,
        Err(resp) => return resp,
    };

    let outcome = client.delete(&path).await;
    if outcome.is_ok() {
        info!(image_id = %path, "Image deleted");
    }
    respond(outcome, "Image deleted", "Delete failed")
}

#[get("/admin/api/images/library")]
pub async fn image_library(
    state: web::Data<AppState>,
    req: HttpRequest,
    filters: web::Query<ImageFilters>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }
    let client = match engine(&state) {
        Ok(client) => client,
        Err(resp) => return resp,
    };

    match client.list(&filters).await {
        Ok(library) => HttpResponse::Ok().json(library),
        Err(e) => json_error(StatusCode::BAD_GATEWAY, e.to_string()),
    }
}

#[get("/admin/api/images/stats")]
pub async fn image_stats(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }
    let client = match engine(&state) {
        Ok(client) => client,
        Err(resp) => return resp,
    };

    match client.stats().await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => json_error(StatusCode::BAD_GATEWAY, e.to_string()),
    }
}

#[get("/admin/api/images/keywords")]
pub async fn image_keywords(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }
    let client = match engine(&state) {
        Ok(client) => client,
        Err(resp) => return resp,
    };

    match client.keywords().await {
        Ok(catalog) => HttpResponse::Ok().json(catalog),
        Err(e) => json_error(StatusCode::BAD_GATEWAY, e.to_string()),
    }
}

#[derive(Deserialize)]
pub struct KeywordSearch {
    #[serde(default)]
    q: String,
}

/// Topic suggestions. Queries shorter than three characters get an empty
/// list without asking the engine.
#[get("/admin/api/images/keywords/search")]
pub async fn image_keyword_search(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<KeywordSearch>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }
    let client = match engine(&state) {
        Ok(client) => client,
        Err(resp) => return resp,
    };

    let q = query.q.trim();
    if q.chars().count() < MIN_KEYWORD_QUERY {
        return HttpResponse::Ok().json(Vec::<String>::new());
    }

    match client.search_keywords(q).await {
        Ok(topics) => HttpResponse::Ok().json(topics),
        Err(e) => json_error(StatusCode::BAD_GATEWAY, e.to_string()),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(image_generate)
        .service(image_rate)
        .service(image_approve)
        .service(image_delete)
        .service(image_library)
        .service(image_stats)
        .service(image_keyword_search)
        .service(image_keywords);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::web::Data;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use dunepress::common::AppConfig;
    use dunepress::models::Locale;
    use dunepress::sections::SectionRegistry;
    use dunepress::services::ImageEngineClient;

    use super::*;
    use crate::web::helpers::ADMIN_TOKEN_HEADER;
    use crate::web::security::RateLimiter;

    const TOKEN: &str = "letmein";

    fn test_state(image_engine: Option<ImageEngineClient>) -> Data<AppState> {
        let database_url = "postgres://localhost/dunepress";
        Data::new(AppState {
            pool: PgPoolOptions::new().connect_lazy(database_url).unwrap(),
            config: Arc::new(AppConfig {
                database_url: database_url.to_string(),
                bind_addr: "127.0.0.1:0".to_string(),
                static_dir: "./static".to_string(),
                default_locale: Locale::En,
                admin_token: Some(TOKEN.to_string()),
                image_engine_url: None,
            }),
            registry: Arc::new(SectionRegistry::with_builtins()),
            rate_limiter: Arc::new(RateLimiter::new()),
            image_engine,
        })
    }

    fn generate_request() -> test::TestRequest {
        test::TestRequest::post()
            .uri("/admin/api/images/generate")
            .insert_header((ADMIN_TOKEN_HEADER, TOKEN))
            .set_json(json!({
                "topic": "Burj Khalifa",
                "imageType": "hero",
                "category": "attractions"
            }))
    }

    #[actix_web::test]
    async fn test_generate_success_returns_result_and_notice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/image-engine/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "img-1",
                "url": "https://cdn.example/burj.jpg",
                "topic": "Burj Khalifa"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let app = test::init_service(
            App::new()
                .app_data(test_state(Some(ImageEngineClient::new(server.uri()))))
                .configure(configure),
        )
        .await;
        let resp = test::call_service(&app, generate_request().to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["result"]["id"], "img-1");
        assert_eq!(body["notice"]["title"], "Image generated");
        assert_eq!(body["notice"]["variant"], "default");
    }

    #[actix_web::test]
    async fn test_generate_failure_returns_bad_gateway_notice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/image-engine/generate"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "error": "Quota exceeded" })))
            .expect(1)
            .mount(&server)
            .await;

        let app = test::init_service(
            App::new()
                .app_data(test_state(Some(ImageEngineClient::new(server.uri()))))
                .configure(configure),
        )
        .await;
        let resp = test::call_service(&app, generate_request().to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("result").is_none());
        assert_eq!(body["notice"]["title"], "Generation failed");
        assert_eq!(body["notice"]["variant"], "destructive");
        assert!(body["notice"]["description"]
            .as_str()
            .unwrap()
            .contains("Quota exceeded"));
    }

    #[actix_web::test]
    async fn test_unconfigured_engine_is_unavailable() {
        let app = test::init_service(App::new().app_data(test_state(None)).configure(configure)).await;
        let resp = test::call_service(&app, generate_request().to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_wrong_token_is_rejected() {
        let app = test::init_service(App::new().app_data(test_state(None)).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/admin/api/images/stats")
            .insert_header((ADMIN_TOKEN_HEADER, "nope"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_short_keyword_search_skips_engine() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/image-engine/keywords/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Dubai Mall"])))
            .expect(0)
            .mount(&server)
            .await;

        let app = test::init_service(
            App::new()
                .app_data(test_state(Some(ImageEngineClient::new(server.uri()))))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/admin/api/images/keywords/search?q=du")
            .insert_header((ADMIN_TOKEN_HEADER, TOKEN))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_keyword_search_forwards_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/image-engine/keywords/search"))
            .and(query_param("q", "dubai"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Dubai Mall", "Dubai Frame"])))
            .expect(1)
            .mount(&server)
            .await;

        let app = test::init_service(
            App::new()
                .app_data(test_state(Some(ImageEngineClient::new(server.uri()))))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/admin/api/images/keywords/search?q=dubai")
            .insert_header((ADMIN_TOKEN_HEADER, TOKEN))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body: Vec<String> = test::read_body_json(resp).await;
        assert_eq!(body, vec!["Dubai Mall".to_string(), "Dubai Frame".to_string()]);
    }
}
