use std::collections::HashMap;

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse, Responder};
use tracing::info;
use uuid::Uuid;

use dunepress::common::SectionError;
use dunepress::db;
use dunepress::log_err;
use dunepress::models::{Locale, Page, PageCreate, SectionCreate, SectionUpdate};
use dunepress::sections::{PageAssembler, RenderContext, ViewState};
use dunepress::types::ReorderRequest;

use crate::web::helpers::{is_unique_violation, json_error, require_admin};
use crate::web::security::validate_slug;
use crate::web::state::AppState;

fn validation_error(err: SectionError) -> HttpResponse {
    json_error(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
}

fn db_error(err: sqlx::Error) -> HttpResponse {
    let err = log_err!(err, "Admin API database error");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {err}"))
}

async fn load_page(state: &AppState, slug: &str) -> Result<Page, HttpResponse> {
    match db::get_page_by_slug(&state.pool, slug, false).await {
        Ok(Some(page)) => Ok(page),
        Ok(None) => Err(json_error(StatusCode::NOT_FOUND, "Page not found")),
        Err(e) => Err(db_error(e)),
    }
}

#[get("/admin/api/section-types")]
pub async fn section_types(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }

    HttpResponse::Ok().json(state.registry.tags())
}

#[get("/admin/api/pages")]
pub async fn pages_list(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }

    match db::list_pages(&state.pool).await {
        Ok(pages) => HttpResponse::Ok().json(pages),
        Err(e) => db_error(e),
    }
}

#[post("/admin/api/pages")]
pub async fn page_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<PageCreate>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }

    let data = body.into_inner();
    if !validate_slug(data.slug.trim()) {
        return json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Slug may only contain lowercase letters, digits, '-' and '_'",
        );
    }
    if data.title.trim().is_empty() {
        return json_error(StatusCode::UNPROCESSABLE_ENTITY, "Title is required");
    }

    match db::create_page(&state.pool, &data).await {
        Ok(page) => {
            info!(page_id = %page.id, slug = %page.slug, "Page created");
            HttpResponse::Created().json(page)
        }
        Err(e) if is_unique_violation(&e) => {
            json_error(StatusCode::CONFLICT, "A page with this slug already exists")
        }
        Err(e) => db_error(e),
    }
}

#[get("/admin/api/pages/{slug}/sections")]
pub async fn sections_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }

    let page = match load_page(&state, &path).await {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    match db::list_sections_for_page(&state.pool, page.id, true).await {
        Ok(sections) => HttpResponse::Ok().json(sections),
        Err(e) => db_error(e),
    }
}

#[post("/admin/api/pages/{slug}/sections")]
pub async fn section_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<SectionCreate>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }

    let data = body.into_inner();
    if let Err(e) = state
        .registry
        .validate(&data.section_type, data.data.as_ref(), data.data_he.as_ref())
    {
        return validation_error(e);
    }

    let page = match load_page(&state, &path).await {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    match db::create_section(&state.pool, page.id, &data).await {
        Ok(section) => {
            info!(
                page_id = %page.id,
                section_id = %section.id,
                section_type = %section.section_type,
                "Section created"
            );
            HttpResponse::Created().json(section)
        }
        Err(e) => db_error(e),
    }
}

#[put("/admin/api/sections/{id}")]
pub async fn section_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<SectionUpdate>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }

    let id = path.into_inner();
    let data = body.into_inner();

    let existing = match db::get_section(&state.pool, id).await {
        Ok(Some(section)) => section,
        Ok(None) => return json_error(StatusCode::NOT_FOUND, "Section not found"),
        Err(e) => return db_error(e),
    };

    // Check the payloads the section will have after the update against the
    // type it will have after the update.
    let section_type = data.section_type.as_deref().unwrap_or(&existing.section_type);
    let payload = data.data.as_ref().or(existing.data.as_ref());
    let payload_he = data.data_he.as_ref().or(existing.data_he.as_ref());
    if let Err(e) = state.registry.validate(section_type, payload, payload_he) {
        return validation_error(e);
    }

    match db::update_section(&state.pool, id, &data).await {
        Ok(Some(section)) => {
            info!(section_id = %section.id, "Section updated");
            HttpResponse::Ok().json(section)
        }
        Ok(None) => json_error(StatusCode::NOT_FOUND, "Section not found"),
        Err(e) => db_error(e),
    }
}

#[delete("/admin/api/sections/{id}")]
pub async fn section_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }

    let id = path.into_inner();
    match db::delete_section(&state.pool, id).await {
        Ok(true) => {
            info!(section_id = %id, "Section deleted");
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Ok(false) => json_error(StatusCode::NOT_FOUND, "Section not found"),
        Err(e) => db_error(e),
    }
}

#[post("/admin/api/pages/{slug}/sections/reorder")]
pub async fn sections_reorder(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<ReorderRequest>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }

    let page = match load_page(&state, &path).await {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    match db::reorder_sections(&state.pool, page.id, &body.ordered_ids).await {
        Ok(sections) => HttpResponse::Ok().json(sections),
        Err(e) => db_error(e),
    }
}

/// Renders a page, published or not, the way visitors would see it.
#[get("/admin/api/pages/{slug}/preview")]
pub async fn page_preview(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    if let Err(resp) = require_admin(&req, &state) {
        return resp;
    }

    let page = match load_page(&state, &path).await {
        Ok(page) => page,
        Err(resp) => return resp,
    };

    let mut query = query.into_inner();
    let locale = query
        .remove("locale")
        .and_then(|l| l.parse::<Locale>().ok())
        .unwrap_or(state.config.default_locale);

    let sections = match db::list_sections_for_page(&state.pool, page.id, false).await {
        Ok(sections) => sections,
        Err(e) => return db_error(e),
    };

    let view = ViewState::from_query(query).with_param("locale", locale.as_str());
    let ctx = RenderContext::new(locale).with_state(view);
    let rendered = PageAssembler::new(&state.registry).assemble(&sections, &ctx);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(rendered.html())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(section_types)
        .service(pages_list)
        .service(page_create)
        .service(sections_reorder)
        .service(sections_list)
        .service(section_create)
        .service(section_update)
        .service(section_delete)
        .service(page_preview);
}
