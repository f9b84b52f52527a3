use std::collections::HashMap;

use actix_web::{get, web, HttpResponse, Responder};
use tracing::info;

use dunepress::db;
use dunepress::log_err;
use dunepress::models::Locale;
use dunepress::sections::{PageAssembler, RenderContext, ViewState};

use crate::web::helpers::{not_found, render};
use crate::web::state::AppState;
use crate::web::templates::PublicPageTemplate;

pub const HOME_SLUG: &str = "home";

async fn render_page(
    state: &AppState,
    locale: Locale,
    slug: &str,
    query: HashMap<String, String>,
) -> HttpResponse {
    let page = match db::get_page_by_slug(&state.pool, slug, true).await {
        Ok(Some(page)) => page,
        Ok(None) => return not_found(locale),
        Err(e) => {
            log_err!(e, "Failed to load page");
            return HttpResponse::InternalServerError().body("Internal Server Error");
        }
    };

    let sections = match db::list_sections_for_page(&state.pool, page.id, false).await {
        Ok(sections) => sections,
        Err(e) => {
            log_err!(e, "Failed to load page sections");
            return HttpResponse::InternalServerError().body("Internal Server Error");
        }
    };

    let ctx = RenderContext::new(locale).with_state(ViewState::from_query(query));
    let rendered = PageAssembler::new(&state.registry).assemble(&sections, &ctx);

    info!(
        slug = %page.slug,
        locale = %locale,
        sections = rendered.sections.len(),
        "Rendered page"
    );

    let alternate = Locale::ALL
        .into_iter()
        .find(|l| *l != locale)
        .unwrap_or(locale);

    render(PublicPageTemplate {
        lang: locale.as_str(),
        dir: locale.direction().as_str(),
        title: page.title_for(locale).to_string(),
        slug: page.slug.clone(),
        alternate_locale: alternate.as_str(),
        body: rendered.html(),
    })
}

#[get("/")]
pub async fn home(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    render_page(&state, state.config.default_locale, HOME_SLUG, query.into_inner()).await
}

#[get("/p/{slug}")]
pub async fn page_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let slug = path.into_inner();
    render_page(&state, state.config.default_locale, &slug, query.into_inner()).await
}

#[get("/{locale}")]
pub async fn localized_home(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    match path.parse::<Locale>() {
        Ok(locale) => render_page(&state, locale, HOME_SLUG, query.into_inner()).await,
        Err(_) => not_found(state.config.default_locale),
    }
}

#[get("/{locale}/p/{slug}")]
pub async fn localized_page_by_slug(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let (locale, slug) = path.into_inner();
    match locale.parse::<Locale>() {
        Ok(locale) => render_page(&state, locale, &slug, query.into_inner()).await,
        Err(_) => not_found(state.config.default_locale),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(page_by_slug)
        .service(localized_page_by_slug)
        .service(localized_home);
}
