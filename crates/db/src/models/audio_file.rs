//! Audio file metadata model and DTOs.
//!
//! Rows describe uploaded mixdowns; the bytes themselves live in object
//! storage under the key recorded at upload time.

use chrono::NaiveDate;
use museboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `audio_files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AudioFile {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub file_url: Option<String>,
    pub dropbox_url: Option<String>,
    pub track_id: DbId,
    pub mixdown_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new audio file record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAudioFile {
    pub name: String,
    pub slug: String,
    pub file_url: Option<String>,
    pub dropbox_url: Option<String>,
    pub track_id: DbId,
    pub mixdown_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// DTO for updating an existing audio file record.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAudioFile {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub file_url: Option<String>,
    pub dropbox_url: Option<String>,
    pub mixdown_date: Option<NaiveDate>,
    pub description: Option<String>,
}
