//! Repository for the `steps` table.

use museboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::step::{CreateStep, Step, UpdateStep};
use crate::relation;

/// Column list for step queries.
const COLUMNS: &str =
    "id, name, key, title, description, kind, artist_id, published, created_at, updated_at";

/// Provides CRUD operations for workflow steps.
pub struct StepRepo;

impl StepRepo {
    /// Point lookup on the global key scope. A missing `steps` relation
    /// counts as "does not exist".
    pub async fn key_exists(pool: &PgPool, key: String) -> Result<bool, sqlx::Error> {
        let id = relation::absorb_missing(
            sqlx::query_scalar::<_, DbId>("SELECT id FROM steps WHERE key = $1")
                .bind(&key)
                .fetch_optional(pool)
                .await,
        )?;
        Ok(id.is_some())
    }

    /// Insert a new step with the given resolved key, returning the row.
    ///
    /// If `kind` is omitted it defaults to `NORMAL`.
    pub async fn create(pool: &PgPool, input: &CreateStep, key: &str) -> Result<Step, sqlx::Error> {
        let query = format!(
            "INSERT INTO steps (name, key, title, description, kind, artist_id, published)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'NORMAL'), $6, COALESCE($7, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(&input.name)
            .bind(key)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.kind)
            .bind(input.artist_id)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Find a step by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Step>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM steps WHERE id = $1");
        relation::absorb_missing(
            sqlx::query_as::<_, Step>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await,
        )
    }

    /// List steps, newest first, optionally filtered by artist.
    pub async fn list(pool: &PgPool, artist_id: Option<DbId>) -> Result<Vec<Step>, sqlx::Error> {
        let result = match artist_id {
            Some(artist_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM steps WHERE artist_id = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Step>(&query)
                    .bind(artist_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM steps ORDER BY created_at DESC");
                sqlx::query_as::<_, Step>(&query).fetch_all(pool).await
            }
        };
        relation::absorb_missing(result)
    }

    /// Update a step by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStep,
    ) -> Result<Option<Step>, sqlx::Error> {
        let query = format!(
            "UPDATE steps SET
                name = COALESCE($2, name),
                key = COALESCE($3, key),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                kind = COALESCE($6, kind),
                published = COALESCE($7, published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.key)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.kind)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a step by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM steps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
