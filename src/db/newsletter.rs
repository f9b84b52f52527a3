use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Locale, NewsletterSubscriber};

/// Stores a signup. Signing up twice with the same address keeps the first
/// row and returns `None`.
pub async fn add_newsletter_subscriber(
    pool: &PgPool,
    email: &str,
    locale: Locale,
    source_section_id: Option<Uuid>,
) -> Result<Option<NewsletterSubscriber>, sqlx::Error> {
    sqlx::query_as::<_, NewsletterSubscriber>(
        r#"
        INSERT INTO newsletter_subscribers (email, locale, source_section_id)
        VALUES ($1, $2, (SELECT id FROM page_sections WHERE id = $3))
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(email)
    .bind(locale.as_str())
    .bind(source_section_id)
    .fetch_optional(pool)
    .await
}
