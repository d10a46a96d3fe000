//! Repository for the `track_statuses` table and the `step_track_statuses`
//! junction (ordered steps within a status).

use museboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::step::Step;
use crate::models::track_status::{
    CreateTrackStatus, TrackStatus, TrackStatusWithSteps, UpdateTrackStatus,
};
use crate::relation;

/// Column list for track status queries.
const COLUMNS: &str = "id, name, key, title, description, artist_id, non_linear, \
    published, created_at, updated_at";

/// Step columns qualified for joins against `steps s`.
const STEP_COLUMNS: &str = "s.id, s.name, s.key, s.title, s.description, s.kind, \
    s.artist_id, s.published, s.created_at, s.updated_at";

/// Provides CRUD operations for track statuses and their step ordering.
pub struct TrackStatusRepo;

impl TrackStatusRepo {
    /// Point lookup on the global key scope. A missing `track_statuses`
    /// relation counts as "does not exist".
    pub async fn key_exists(pool: &PgPool, key: String) -> Result<bool, sqlx::Error> {
        let id = relation::absorb_missing(
            sqlx::query_scalar::<_, DbId>("SELECT id FROM track_statuses WHERE key = $1")
                .bind(&key)
                .fetch_optional(pool)
                .await,
        )?;
        Ok(id.is_some())
    }

    /// Insert a new track status with the given resolved key, returning the row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTrackStatus,
        key: &str,
    ) -> Result<TrackStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO track_statuses
                (name, key, title, description, artist_id, non_linear, published)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, FALSE), COALESCE($7, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrackStatus>(&query)
            .bind(&input.name)
            .bind(key)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.artist_id)
            .bind(input.non_linear)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Find a track status by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TrackStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM track_statuses WHERE id = $1");
        relation::absorb_missing(
            sqlx::query_as::<_, TrackStatus>(&query)
                .bind(id)
                .fetch_optional(pool)
                .await,
        )
    }

    /// Find a track status with its steps in workflow order.
    pub async fn find_with_steps(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TrackStatusWithSteps>, sqlx::Error> {
        let Some(status) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let steps = Self::list_steps(pool, id).await?;
        Ok(Some(TrackStatusWithSteps { status, steps }))
    }

    /// List track statuses, newest first, optionally filtered by artist.
    pub async fn list(
        pool: &PgPool,
        artist_id: Option<DbId>,
    ) -> Result<Vec<TrackStatus>, sqlx::Error> {
        let result = match artist_id {
            Some(artist_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM track_statuses
                     WHERE artist_id = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, TrackStatus>(&query)
                    .bind(artist_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM track_statuses ORDER BY created_at DESC");
                sqlx::query_as::<_, TrackStatus>(&query).fetch_all(pool).await
            }
        };
        relation::absorb_missing(result)
    }

    /// Update a track status by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrackStatus,
    ) -> Result<Option<TrackStatus>, sqlx::Error> {
        let query = format!(
            "UPDATE track_statuses SET
                name = COALESCE($2, name),
                key = COALESCE($3, key),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                non_linear = COALESCE($6, non_linear),
                published = COALESCE($7, published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrackStatus>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.key)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.non_linear)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track status by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM track_statuses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- step_track_statuses junction ----------------------------------------

    /// List a status's steps ordered by `order_index`, ties broken by
    /// insertion order. Steps whose row no longer exists are dropped by the
    /// join rather than surfaced as an error.
    pub async fn list_steps(pool: &PgPool, status_id: DbId) -> Result<Vec<Step>, sqlx::Error> {
        let query = format!(
            "SELECT {STEP_COLUMNS}
             FROM step_track_statuses link
             JOIN steps s ON s.id = link.step_id
             WHERE link.track_status_id = $1
             ORDER BY link.order_index ASC, link.id ASC"
        );
        relation::absorb_missing(
            sqlx::query_as::<_, Step>(&query)
                .bind(status_id)
                .fetch_all(pool)
                .await,
        )
    }

    /// Attach a step to a track status at the given position.
    ///
    /// Attaching the same step twice is a caller error: the second insert
    /// violates `uq_step_track_statuses` and the error propagates.
    pub async fn add_step(
        pool: &PgPool,
        status_id: DbId,
        step_id: DbId,
        order_index: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO step_track_statuses (track_status_id, step_id, order_index)
             VALUES ($1, $2, $3)",
        )
        .bind(status_id)
        .bind(step_id)
        .bind(order_index)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Detach a step from a track status. Idempotent: detaching an absent
    /// pair affects zero rows and succeeds.
    pub async fn remove_step(
        pool: &PgPool,
        status_id: DbId,
        step_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "DELETE FROM step_track_statuses WHERE track_status_id = $1 AND step_id = $2",
        )
        .bind(status_id)
        .bind(step_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
