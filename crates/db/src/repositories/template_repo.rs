//! Repository for the `templates` table and the `template_statuses`
//! junction (ordered statuses within a template).

use museboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::template::{CreateTemplate, Template, TemplateWithStatuses, UpdateTemplate};
use crate::models::track_status::TrackStatus;
use crate::relation;

/// Column list for template queries.
const COLUMNS: &str = "id, name, description, artist_id, published, created_at, updated_at";

/// Track status columns qualified for joins against `track_statuses ts`.
const STATUS_COLUMNS: &str = "ts.id, ts.name, ts.key, ts.title, ts.description, \
    ts.artist_id, ts.non_linear, ts.published, ts.created_at, ts.updated_at";

/// Provides CRUD operations for templates and their status ordering.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a new template, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTemplate) -> Result<Template, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates (name, description, artist_id, published)
             VALUES ($1, $2, $3, COALESCE($4, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.artist_id)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Find a template by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE id = $1");
        relation::absorb_missing(
            sqlx::query_as::<_, Template>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await,
        )
    }

    /// Find a template with its statuses in workflow order.
    pub async fn find_with_statuses(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TemplateWithStatuses>, sqlx::Error> {
        let Some(template) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let statuses = Self::list_statuses(pool, id).await?;
        Ok(Some(TemplateWithStatuses { template, statuses }))
    }

    /// List templates, newest first, optionally filtered by artist.
    pub async fn list(
        pool: &PgPool,
        artist_id: Option<DbId>,
    ) -> Result<Vec<Template>, sqlx::Error> {
        let result = match artist_id {
            Some(artist_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM templates WHERE artist_id = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Template>(&query)
                    .bind(artist_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM templates ORDER BY created_at DESC");
                sqlx::query_as::<_, Template>(&query).fetch_all(pool).await
            }
        };
        relation::absorb_missing(result)
    }

    /// Update a template by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!(
            "UPDATE templates SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                published = COALESCE($4, published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a template by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- template_statuses junction ------------------------------------------

    /// List a template's statuses ordered by `order_index`, ties broken by
    /// insertion order. Statuses whose row no longer exists are dropped by
    /// the join rather than surfaced as an error.
    pub async fn list_statuses(
        pool: &PgPool,
        template_id: DbId,
    ) -> Result<Vec<TrackStatus>, sqlx::Error> {
        let query = format!(
            "SELECT {STATUS_COLUMNS}
             FROM template_statuses link
             JOIN track_statuses ts ON ts.id = link.track_status_id
             WHERE link.template_id = $1
             ORDER BY link.order_index ASC, link.id ASC"
        );
        relation::absorb_missing(
            sqlx::query_as::<_, TrackStatus>(&query)
                .bind(template_id)
                .fetch_all(pool)
                .await,
        )
    }

    /// Attach a status to a template at the given position.
    ///
    /// Attaching the same status twice is a caller error: the second insert
    /// violates `uq_template_statuses` and the error propagates.
    pub async fn add_status(
        pool: &PgPool,
        template_id: DbId,
        track_status_id: DbId,
        order_index: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO template_statuses (template_id, track_status_id, order_index)
             VALUES ($1, $2, $3)",
        )
        .bind(template_id)
        .bind(track_status_id)
        .bind(order_index)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Detach a status from a template. Idempotent: detaching an absent
    /// pair affects zero rows and succeeds.
    pub async fn remove_status(
        pool: &PgPool,
        template_id: DbId,
        track_status_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "DELETE FROM template_statuses WHERE template_id = $1 AND track_status_id = $2",
        )
        .bind(template_id)
        .bind(track_status_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
