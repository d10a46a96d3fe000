//! Per-track step completion record.

use museboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `track_steps` table. At most one row exists per
/// `(track_id, step_id)` pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrackStep {
    pub id: DbId,
    pub track_id: DbId,
    pub step_id: DbId,
    /// Principal who completed the step, if known.
    pub completed_by: Option<DbId>,
    pub completed_at: Timestamp,
}
