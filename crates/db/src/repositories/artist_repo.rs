//! Repository for the `artists` table.

use museboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist::{Artist, CreateArtist, UpdateArtist};
use crate::relation;

/// Column list for artist queries.
const COLUMNS: &str = "id, name, slug, template_id, created_at, updated_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Point lookup on the global slug scope. A missing `artists` relation
    /// counts as "does not exist".
    pub async fn slug_exists(pool: &PgPool, slug: String) -> Result<bool, sqlx::Error> {
        let id = relation::absorb_missing(
            sqlx::query_scalar::<_, DbId>("SELECT id FROM artists WHERE slug = $1")
                .bind(&slug)
                .fetch_optional(pool)
                .await,
        )?;
        Ok(id.is_some())
    }

    /// Insert a new artist with the given resolved slug, returning the row.
    ///
    /// A slug race between probe and insert surfaces as a unique-constraint
    /// violation on `uq_artists_slug`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateArtist,
        slug: &str,
    ) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, slug, template_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(input.template_id)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        relation::absorb_missing(
            sqlx::query_as::<_, Artist>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await,
        )
    }

    /// List all artists, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY created_at DESC");
        relation::absorb_missing(sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await)
    }

    /// Update an artist by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                template_id = COALESCE($4, template_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.template_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
