//! Workflow step model and DTOs.

use museboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `steps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Step {
    pub id: DbId,
    pub name: String,
    pub key: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// One of `museboard_core::validate::STEP_KINDS`.
    pub kind: String,
    /// Owning artist; `NULL` for studio-wide steps.
    pub artist_id: Option<DbId>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new step.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStep {
    pub name: String,
    /// Explicit key override; resolved from `name` when omitted.
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Defaults to `NORMAL` if omitted.
    pub kind: Option<String>,
    pub artist_id: Option<DbId>,
    pub published: Option<bool>,
}

/// DTO for updating an existing step. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStep {
    pub name: Option<String>,
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub published: Option<bool>,
}
