//! Repository for the `track_steps` table (per-track step completion).
//!
//! Each `(track, step)` pair is a two-state machine: incomplete or
//! complete. Both transitions are idempotent, and both tolerate the
//! backing relation not existing yet.

use museboard_core::types::DbId;
use sqlx::PgPool;

use crate::relation;

/// Provides completion-state operations for tracks.
pub struct TrackStepRepo;

impl TrackStepRepo {
    /// Mark a step complete for a track, attributed to the acting principal
    /// when known.
    ///
    /// Completing an already-complete step is success, not an error: the
    /// insert hits `uq_track_steps` and is dropped by `ON CONFLICT`.
    pub async fn complete(
        pool: &PgPool,
        track_id: DbId,
        step_id: DbId,
        completed_by: Option<DbId>,
    ) -> Result<(), sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO track_steps (track_id, step_id, completed_by)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_track_steps DO NOTHING",
        )
        .bind(track_id)
        .bind(step_id)
        .bind(completed_by)
        .execute(pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(ref err) if relation::undefined_table(err) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Mark a step incomplete for a track. Idempotent: deleting an absent
    /// record affects zero rows and succeeds.
    pub async fn uncomplete(pool: &PgPool, track_id: DbId, step_id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM track_steps WHERE track_id = $1 AND step_id = $2")
            .bind(track_id)
            .bind(step_id)
            .execute(pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(ref err) if relation::undefined_table(err) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// List the IDs of all completed steps for a track.
    pub async fn list_completed(pool: &PgPool, track_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        relation::absorb_missing(
            sqlx::query_scalar::<_, DbId>(
                "SELECT step_id FROM track_steps WHERE track_id = $1 ORDER BY completed_at ASC",
            )
            .bind(track_id)
            .fetch_all(pool)
            .await,
        )
    }
}
