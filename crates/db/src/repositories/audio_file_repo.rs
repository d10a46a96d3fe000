//! Repository for the `audio_files` table.

use museboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::audio_file::{AudioFile, CreateAudioFile, UpdateAudioFile};
use crate::relation;

/// Column list for audio file queries.
const COLUMNS: &str = "id, name, slug, file_url, dropbox_url, track_id, mixdown_date, \
    description, created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for audio file records.
pub struct AudioFileRepo;

impl AudioFileRepo {
    /// Insert a new audio file record attributed to the acting principal,
    /// returning the row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateAudioFile,
    ) -> Result<AudioFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO audio_files
                (name, slug, file_url, dropbox_url, track_id, mixdown_date, description, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AudioFile>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.file_url)
            .bind(&input.dropbox_url)
            .bind(input.track_id)
            .bind(input.mixdown_date)
            .bind(&input.description)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find an audio file record by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AudioFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM audio_files WHERE id = $1");
        relation::absorb_missing(
            sqlx::query_as::<_, AudioFile>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await,
        )
    }

    /// List all audio files for a track, newest first.
    pub async fn list_by_track(
        pool: &PgPool,
        track_id: DbId,
    ) -> Result<Vec<AudioFile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audio_files WHERE track_id = $1 ORDER BY created_at DESC"
        );
        relation::absorb_missing(
            sqlx::query_as::<_, AudioFile>(&query)
                .bind(track_id)
                .fetch_all(pool)
                .await,
        )
    }

    /// Update an audio file record by ID, attributed to the acting
    /// principal, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateAudioFile,
    ) -> Result<Option<AudioFile>, sqlx::Error> {
        let query = format!(
            "UPDATE audio_files SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                file_url = COALESCE($4, file_url),
                dropbox_url = COALESCE($5, dropbox_url),
                mixdown_date = COALESCE($6, mixdown_date),
                description = COALESCE($7, description),
                updated_by = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AudioFile>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.file_url)
            .bind(&input.dropbox_url)
            .bind(input.mixdown_date)
            .bind(&input.description)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an audio file record by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM audio_files WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
