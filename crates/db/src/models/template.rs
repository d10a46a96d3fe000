//! Workflow template model and DTOs.

use museboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::track_status::TrackStatus;

/// A row from the `templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Template {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Owning artist; `NULL` for studio-wide templates.
    pub artist_id: Option<DbId>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplate {
    pub name: String,
    pub description: Option<String>,
    pub artist_id: Option<DbId>,
    pub published: Option<bool>,
}

/// DTO for updating an existing template. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTemplate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub published: Option<bool>,
}

/// DTO for attaching a track status to a template.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTemplateStatus {
    pub track_status_id: DbId,
    /// Position within the template; defaults to 0.
    pub order_index: Option<i32>,
}

/// A template together with its statuses in workflow order.
#[derive(Debug, Serialize)]
pub struct TemplateWithStatuses {
    #[serde(flatten)]
    pub template: Template,
    pub statuses: Vec<TrackStatus>,
}
