//! Repository for the `albums` table.

use museboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::album::{Album, AlbumWithTracks, CreateAlbum, UpdateAlbum};
use crate::models::track::Track;
use crate::relation;

/// Column list for album queries.
const COLUMNS: &str =
    "id, name, slug, description, artist_id, release_date, image_url, created_at, updated_at";

/// Column list for track queries, qualified for joins against `tracks t`.
const TRACK_COLUMNS: &str = "t.id, t.name, t.key, t.artist_id, t.template_id, \
    t.track_status_id, t.step_id, t.tempo, t.time_signature_numerator, \
    t.time_signature_denominator, t.time_signature_varied, t.minutes, t.seconds, \
    t.samples, t.album_id, t.album_order, t.date_created, t.isrc_code, t.live_ready, \
    t.description, t.created_by, t.updated_by, t.created_at, t.updated_at";

/// Provides CRUD operations for albums.
pub struct AlbumRepo;

impl AlbumRepo {
    /// Point lookup on the global slug scope. A missing `albums` relation
    /// counts as "does not exist".
    pub async fn slug_exists(pool: &PgPool, slug: String) -> Result<bool, sqlx::Error> {
        let id = relation::absorb_missing(
            sqlx::query_scalar::<_, DbId>("SELECT id FROM albums WHERE slug = $1")
                .bind(&slug)
                .fetch_optional(pool)
                .await,
        )?;
        Ok(id.is_some())
    }

    /// Insert a new album with the given resolved slug, returning the row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAlbum,
        slug: &str,
    ) -> Result<Album, sqlx::Error> {
        let query = format!(
            "INSERT INTO albums (name, slug, description, artist_id, release_date, image_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.description)
            .bind(input.artist_id)
            .bind(input.release_date)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an album by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1");
        relation::absorb_missing(
            sqlx::query_as::<_, Album>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await,
        )
    }

    /// Find an album with its tracks sorted by `album_order`, unordered
    /// tracks last.
    pub async fn find_with_tracks(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AlbumWithTracks>, sqlx::Error> {
        let Some(album) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {TRACK_COLUMNS} FROM tracks t
             WHERE t.album_id = $1
             ORDER BY t.album_order ASC NULLS LAST, t.id ASC"
        );
        let tracks = relation::absorb_missing(
            sqlx::query_as::<_, Track>(&query)
                .bind(id)
                .fetch_all(pool)
                .await,
        )?;

        Ok(Some(AlbumWithTracks { album, tracks }))
    }

    /// List albums, newest first, optionally filtered by artist.
    pub async fn list(pool: &PgPool, artist_id: Option<DbId>) -> Result<Vec<Album>, sqlx::Error> {
        let result = match artist_id {
            Some(artist_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM albums WHERE artist_id = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Album>(&query)
                    .bind(artist_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM albums ORDER BY created_at DESC");
                sqlx::query_as::<_, Album>(&query).fetch_all(pool).await
            }
        };
        relation::absorb_missing(result)
    }

    /// Update an album by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAlbum,
    ) -> Result<Option<Album>, sqlx::Error> {
        let query = format!(
            "UPDATE albums SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                release_date = COALESCE($5, release_date),
                image_url = COALESCE($6, image_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an album by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
