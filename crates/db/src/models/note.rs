//! Production note model and DTOs.

use museboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub note: String,
    pub track_id: DbId,
    pub step_id: Option<DbId>,
    pub track_status_id: Option<DbId>,
    pub done: bool,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new note. The acting principal is passed separately.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNote {
    pub note: String,
    pub track_id: DbId,
    pub step_id: Option<DbId>,
    pub track_status_id: Option<DbId>,
    pub done: Option<bool>,
}

/// DTO for updating an existing note. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNote {
    pub note: Option<String>,
    pub step_id: Option<DbId>,
    pub track_status_id: Option<DbId>,
    pub done: Option<bool>,
}
