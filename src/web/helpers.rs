use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use dunepress::models::Locale;
use dunepress::types::ApiError;

use crate::web::security::tokens_match;
use crate::web::state::AppState;
use crate::web::templates::NotFoundTemplate;

pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_with_status(StatusCode::OK, t)
}

pub fn render_with_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn not_found(locale: Locale) -> HttpResponse {
    render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            lang: locale.as_str(),
            dir: locale.direction().as_str(),
        },
    )
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiError::new(message))
}

/// Admin endpoints need `X-Admin-Token` to match the configured token. With
/// no token configured they are switched off.
pub fn require_admin(req: &HttpRequest, state: &AppState) -> Result<(), HttpResponse> {
    let Some(expected) = state.config.admin_token.as_deref() else {
        return Err(json_error(StatusCode::FORBIDDEN, "Admin API is disabled"));
    };

    let provided = req
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .unwrap_or_default();

    if tokens_match(expected, provided) {
        Ok(())
    } else {
        Err(json_error(StatusCode::UNAUTHORIZED, "Invalid admin token"))
    }
}

/// Key for per-client rate limiting.
pub fn client_key(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

/// Where to send the visitor after a form post: back to the page they came
/// from when it is on this site, otherwise home.
pub fn back_to(req: &HttpRequest) -> String {
    let host = req.connection_info().host().to_string();
    req.headers()
        .get(actix_web::http::header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|referer| same_site_path(referer, &host))
        .unwrap_or_else(|| "/".to_string())
}

/// The path of `referer` when it points at `host`. Paths a browser would read
/// as another origin (`//evil.example`, `/\evil.example`) are refused.
fn same_site_path(referer: &str, host: &str) -> Option<String> {
    let rest = referer
        .strip_prefix("https://")
        .or_else(|| referer.strip_prefix("http://"))?;
    let path_start = rest.find('/').unwrap_or(rest.len());
    if &rest[..path_start] != host {
        return None;
    }

    let path = &rest[path_start..];
    if path.is_empty() {
        return Some("/".to_string());
    }
    if path.starts_with("//") || path.starts_with("/\\") {
        return None;
    }
    Some(path.to_string())
}
