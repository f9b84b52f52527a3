use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{PageSection, SectionCreate, SectionUpdate};

/// Sections of a page in display order. Hidden sections are included only
/// for the editor.
pub async fn list_sections_for_page(
    pool: &PgPool,
    page_id: Uuid,
    include_hidden: bool,
) -> Result<Vec<PageSection>, sqlx::Error> {
    sqlx::query_as::<_, PageSection>(
        r#"
        SELECT *
        FROM page_sections
        WHERE page_id = $1 AND (is_visible OR $2)
        ORDER BY sort_order ASC, created_at ASC
        "#,
    )
    .bind(page_id)
    .bind(include_hidden)
    .fetch_all(pool)
    .await
}

pub async fn get_section(pool: &PgPool, id: Uuid) -> Result<Option<PageSection>, sqlx::Error> {
    sqlx::query_as::<_, PageSection>(
        r#"
        SELECT *
        FROM page_sections
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Inserts a section. Without an explicit `sort_order` it goes last.
pub async fn create_section(
    pool: &PgPool,
    page_id: Uuid,
    data: &SectionCreate,
) -> Result<PageSection, sqlx::Error> {
    sqlx::query_as::<_, PageSection>(
        r#"
        INSERT INTO page_sections (
            page_id, section_type, sort_order, is_visible,
            title, title_he, subtitle, subtitle_he, description, description_he,
            button_text, button_text_he, button_link,
            data, data_he, images, background_image, background_color
        )
        VALUES (
            $1, $2,
            COALESCE($3, (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM page_sections WHERE page_id = $1)),
            COALESCE($4, TRUE),
            $5, $6, $7, $8, $9, $10,
            $11, $12, $13,
            $14, $15, COALESCE($16, '{}'::TEXT[]), $17, $18
        )
        RETURNING *
        "#,
    )
    .bind(page_id)
    .bind(&data.section_type)
    .bind(data.sort_order)
    .bind(data.is_visible)
    .bind(data.title.as_deref())
    .bind(data.title_he.as_deref())
    .bind(data.subtitle.as_deref())
    .bind(data.subtitle_he.as_deref())
    .bind(data.description.as_deref())
    .bind(data.description_he.as_deref())
    .bind(data.button_text.as_deref())
    .bind(data.button_text_he.as_deref())
    .bind(data.button_link.as_deref())
    .bind(data.data.as_ref())
    .bind(data.data_he.as_ref())
    .bind(data.images.as_deref())
    .bind(data.background_image.as_deref())
    .bind(data.background_color.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn update_section(
    pool: &PgPool,
    id: Uuid,
    data: &SectionUpdate,
) -> Result<Option<PageSection>, sqlx::Error> {
    sqlx::query_as::<_, PageSection>(
        r#"
        UPDATE page_sections
        SET
            section_type = COALESCE($1, section_type),
            sort_order = COALESCE($2, sort_order),
            is_visible = COALESCE($3, is_visible),
            title = COALESCE($4, title),
            title_he = COALESCE($5, title_he),
            subtitle = COALESCE($6, subtitle),
            subtitle_he = COALESCE($7, subtitle_he),
            description = COALESCE($8, description),
            description_he = COALESCE($9, description_he),
            button_text = COALESCE($10, button_text),
            button_text_he = COALESCE($11, button_text_he),
            button_link = COALESCE($12, button_link),
            data = COALESCE($13, data),
            data_he = COALESCE($14, data_he),
            images = COALESCE($15, images),
            background_image = COALESCE($16, background_image),
            background_color = COALESCE($17, background_color),
            updated_at = now()
        WHERE id = $18
        RETURNING *
        "#,
    )
    .bind(data.section_type.as_deref())
    .bind(data.sort_order)
    .bind(data.is_visible)
    .bind(data.title.as_deref())
    .bind(data.title_he.as_deref())
    .bind(data.subtitle.as_deref())
    .bind(data.subtitle_he.as_deref())
    .bind(data.description.as_deref())
    .bind(data.description_he.as_deref())
    .bind(data.button_text.as_deref())
    .bind(data.button_text_he.as_deref())
    .bind(data.button_link.as_deref())
    .bind(data.data.as_ref())
    .bind(data.data_he.as_ref())
    .bind(data.images.as_deref())
    .bind(data.background_image.as_deref())
    .bind(data.background_color.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was deleted.
pub async fn delete_section(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM page_sections WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Assigns `sort_order` 0, 1, 2, ... following `ordered_ids`. Ids that do not
/// belong to the page are ignored. Runs in one transaction.
pub async fn reorder_sections(
    pool: &PgPool,
    page_id: Uuid,
    ordered_ids: &[Uuid],
) -> Result<Vec<PageSection>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (position, id) in ordered_ids.iter().enumerate() {
        sqlx::query(
            r#"
            UPDATE page_sections
            SET sort_order = $1, updated_at = now()
            WHERE id = $2 AND page_id = $3
            "#,
        )
        .bind(position as i32)
        .bind(id)
        .bind(page_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    list_sections_for_page(pool, page_id, true).await
}
