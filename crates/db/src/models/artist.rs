//! Artist entity model and DTOs.

use museboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub template_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new artist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    /// Explicit slug override; resolved from `name` when omitted.
    pub slug: Option<String>,
    pub template_id: Option<DbId>,
}

/// DTO for updating an existing artist. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateArtist {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub template_id: Option<DbId>,
}
