use std::time::Duration;

use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use tracing::{info, warn};
use uuid::Uuid;

use dunepress::db;
use dunepress::log_err;
use dunepress::models::Locale;
use dunepress::services::normalize_email;
use dunepress::types::NewsletterSignup;

use crate::web::helpers::{back_to, client_key};
use crate::web::state::AppState;

const SIGNUPS_PER_WINDOW: usize = 5;
const SIGNUP_WINDOW: Duration = Duration::from_secs(10 * 60);

/// Receives the newsletter section's form.
#[post("/newsletter/subscribe")]
pub async fn subscribe(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<NewsletterSignup>,
) -> impl Responder {
    let back = back_to(&req);

    if !state
        .rate_limiter
        .check_rate_limit(&client_key(&req), SIGNUPS_PER_WINDOW, SIGNUP_WINDOW)
    {
        warn!(client = %client_key(&req), "Newsletter signup rate limit exceeded");
        return HttpResponse::TooManyRequests().body("Too many signup attempts, please try again later");
    }

    let Some(email) = normalize_email(&form.email) else {
        return HttpResponse::BadRequest().body("Please enter a valid email address");
    };

    let locale = form
        .locale
        .as_deref()
        .and_then(|l| l.parse::<Locale>().ok())
        .unwrap_or(state.config.default_locale);

    let section_id = form
        .section_id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s.trim()).ok());

    match db::add_newsletter_subscriber(&state.pool, &email, locale, section_id).await {
        Ok(Some(subscriber)) => {
            info!(subscriber_id = %subscriber.id, locale = %locale, "Newsletter signup");
        }
        Ok(None) => {
            info!(locale = %locale, "Newsletter signup for an existing subscriber");
        }
        Err(e) => {
            log_err!(e, "Failed to store newsletter signup");
            return HttpResponse::InternalServerError().body("Could not complete signup");
        }
    }

    HttpResponse::SeeOther()
        .insert_header(("Location", back))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(subscribe);
}
