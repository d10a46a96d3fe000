//! Repository for the `tracks` table.

use museboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::track::{CreateTrack, Track, UpdateTrack};
use crate::relation;

/// Column list for track queries.
const COLUMNS: &str = "id, name, key, artist_id, template_id, track_status_id, step_id, \
    tempo, time_signature_numerator, time_signature_denominator, time_signature_varied, \
    minutes, seconds, samples, album_id, album_order, date_created, isrc_code, live_ready, \
    description, created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Point lookup on the global key scope. A missing `tracks` relation
    /// counts as "does not exist".
    pub async fn key_exists(pool: &PgPool, key: String) -> Result<bool, sqlx::Error> {
        let id = relation::absorb_missing(
            sqlx::query_scalar::<_, DbId>("SELECT id FROM tracks WHERE key = $1")
                .bind(&key)
                .fetch_optional(pool)
                .await,
        )?;
        Ok(id.is_some())
    }

    /// Insert a new track with the given resolved key, attributed to the
    /// acting principal, returning the row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTrack,
        key: &str,
    ) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks
                (name, key, artist_id, template_id, track_status_id, step_id,
                 tempo, time_signature_numerator, time_signature_denominator,
                 time_signature_varied, minutes, seconds, samples, album_id,
                 album_order, date_created, isrc_code, live_ready, description,
                 created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9,
                     COALESCE($10, FALSE), $11, $12, COALESCE($13, ''), $14,
                     $15, $16, $17, COALESCE($18, FALSE), $19, $20)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.name)
            .bind(key)
            .bind(input.artist_id)
            .bind(input.template_id)
            .bind(input.track_status_id)
            .bind(input.step_id)
            .bind(input.tempo)
            .bind(input.time_signature_numerator)
            .bind(input.time_signature_denominator)
            .bind(input.time_signature_varied)
            .bind(input.minutes)
            .bind(input.seconds)
            .bind(&input.samples)
            .bind(input.album_id)
            .bind(input.album_order)
            .bind(input.date_created)
            .bind(&input.isrc_code)
            .bind(input.live_ready)
            .bind(&input.description)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        relation::absorb_missing(
            sqlx::query_as::<_, Track>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await,
        )
    }

    /// List all tracks for an artist, newest first.
    pub async fn list_by_artist(pool: &PgPool, artist_id: DbId) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracks WHERE artist_id = $1 ORDER BY created_at DESC"
        );
        relation::absorb_missing(
            sqlx::query_as::<_, Track>(&query)
                .bind(artist_id)
                .fetch_all(pool)
                .await,
        )
    }

    /// Update a track by ID, attributed to the acting principal, returning
    /// the updated row.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateTrack,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET
                name = COALESCE($2, name),
                key = COALESCE($3, key),
                template_id = COALESCE($4, template_id),
                track_status_id = COALESCE($5, track_status_id),
                step_id = COALESCE($6, step_id),
                tempo = COALESCE($7, tempo),
                time_signature_numerator = COALESCE($8, time_signature_numerator),
                time_signature_denominator = COALESCE($9, time_signature_denominator),
                time_signature_varied = COALESCE($10, time_signature_varied),
                minutes = COALESCE($11, minutes),
                seconds = COALESCE($12, seconds),
                samples = COALESCE($13, samples),
                album_id = COALESCE($14, album_id),
                album_order = COALESCE($15, album_order),
                date_created = COALESCE($16, date_created),
                isrc_code = COALESCE($17, isrc_code),
                live_ready = COALESCE($18, live_ready),
                description = COALESCE($19, description),
                updated_by = $20,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.key)
            .bind(input.template_id)
            .bind(input.track_status_id)
            .bind(input.step_id)
            .bind(input.tempo)
            .bind(input.time_signature_numerator)
            .bind(input.time_signature_denominator)
            .bind(input.time_signature_varied)
            .bind(input.minutes)
            .bind(input.seconds)
            .bind(&input.samples)
            .bind(input.album_id)
            .bind(input.album_order)
            .bind(input.date_created)
            .bind(&input.isrc_code)
            .bind(input.live_ready)
            .bind(&input.description)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
