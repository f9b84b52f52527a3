use sqlx::PgPool;

use crate::models::{Page, PageCreate};

pub async fn list_pages(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
    sqlx::query_as::<_, Page>(
        r#"
        SELECT *
        FROM pages
        ORDER BY slug ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_page_by_slug(
    pool: &PgPool,
    slug: &str,
    published_only: bool,
) -> Result<Option<Page>, sqlx::Error> {
    sqlx::query_as::<_, Page>(
        r#"
        SELECT *
        FROM pages
        WHERE slug = $1 AND (is_published OR NOT $2)
        "#,
    )
    .bind(slug)
    .bind(published_only)
    .fetch_optional(pool)
    .await
}

pub async fn create_page(pool: &PgPool, data: &PageCreate) -> Result<Page, sqlx::Error> {
    sqlx::query_as::<_, Page>(
        r#"
        INSERT INTO pages (slug, title, title_he, is_published)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(data.slug.trim())
    .bind(&data.title)
    .bind(data.title_he.as_deref())
    .bind(data.is_published)
    .fetch_one(pool)
    .await
}
