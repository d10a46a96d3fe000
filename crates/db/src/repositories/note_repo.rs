//! Repository for the `notes` table.

use museboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::relation;

/// Column list for note queries.
const COLUMNS: &str = "id, note, track_id, step_id, track_status_id, done, \
    created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for track notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note attributed to the acting principal, returning the row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (note, track_id, step_id, track_status_id, done, created_by)
             VALUES ($1, $2, $3, $4, COALESCE($5, FALSE), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.note)
            .bind(input.track_id)
            .bind(input.step_id)
            .bind(input.track_status_id)
            .bind(input.done)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        relation::absorb_missing(
            sqlx::query_as::<_, Note>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await,
        )
    }

    /// List all notes for a track, newest first.
    pub async fn list_by_track(pool: &PgPool, track_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM notes WHERE track_id = $1 ORDER BY created_at DESC");
        relation::absorb_missing(
            sqlx::query_as::<_, Note>(&query)
                .bind(track_id)
                .fetch_all(pool)
                .await,
        )
    }

    /// Update a note by ID, attributed to the acting principal, returning
    /// the updated row.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                note = COALESCE($2, note),
                step_id = COALESCE($3, step_id),
                track_status_id = COALESCE($4, track_status_id),
                done = COALESCE($5, done),
                updated_by = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.note)
            .bind(input.step_id)
            .bind(input.track_status_id)
            .bind(input.done)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
