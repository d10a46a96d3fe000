//! Track status (workflow stage) model and DTOs.

use museboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::step::Step;

/// A row from the `track_statuses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrackStatus {
    pub id: DbId,
    pub name: String,
    pub key: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Owning artist; `NULL` for studio-wide statuses.
    pub artist_id: Option<DbId>,
    /// Whether steps inside this status may be completed in any order.
    pub non_linear: bool,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new track status.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrackStatus {
    pub name: String,
    /// Explicit key override; resolved from `name` when omitted.
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub artist_id: Option<DbId>,
    pub non_linear: Option<bool>,
    pub published: Option<bool>,
}

/// DTO for updating an existing track status. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrackStatus {
    pub name: Option<String>,
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub non_linear: Option<bool>,
    pub published: Option<bool>,
}

/// DTO for attaching a step to a track status.
#[derive(Debug, Clone, Deserialize)]
pub struct AddStatusStep {
    pub step_id: DbId,
    /// Position within the status; defaults to 0.
    pub order_index: Option<i32>,
}

/// A track status together with its steps in workflow order.
#[derive(Debug, Serialize)]
pub struct TrackStatusWithSteps {
    #[serde(flatten)]
    pub status: TrackStatus,
    pub steps: Vec<Step>,
}
