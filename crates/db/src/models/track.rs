//! Track entity model and DTOs.

use chrono::NaiveDate;
use museboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub name: String,
    pub key: String,
    pub artist_id: DbId,
    pub template_id: Option<DbId>,
    pub track_status_id: Option<DbId>,
    pub step_id: Option<DbId>,
    pub tempo: Option<f64>,
    pub time_signature_numerator: Option<i32>,
    pub time_signature_denominator: Option<i32>,
    pub time_signature_varied: bool,
    pub minutes: Option<i32>,
    pub seconds: Option<i32>,
    pub samples: String,
    pub album_id: Option<DbId>,
    pub album_order: Option<i32>,
    pub date_created: Option<NaiveDate>,
    pub isrc_code: Option<String>,
    pub live_ready: bool,
    pub description: Option<String>,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new track.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrack {
    pub name: String,
    /// Explicit key override; resolved from `name` when omitted.
    pub key: Option<String>,
    pub artist_id: DbId,
    pub template_id: Option<DbId>,
    pub track_status_id: Option<DbId>,
    pub step_id: Option<DbId>,
    pub tempo: Option<f64>,
    pub time_signature_numerator: Option<i32>,
    pub time_signature_denominator: Option<i32>,
    pub time_signature_varied: Option<bool>,
    pub minutes: Option<i32>,
    pub seconds: Option<i32>,
    pub samples: Option<String>,
    pub album_id: Option<DbId>,
    pub album_order: Option<i32>,
    pub date_created: Option<NaiveDate>,
    pub isrc_code: Option<String>,
    pub live_ready: Option<bool>,
    pub description: Option<String>,
}

/// DTO for updating an existing track. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTrack {
    pub name: Option<String>,
    pub key: Option<String>,
    pub template_id: Option<DbId>,
    pub track_status_id: Option<DbId>,
    pub step_id: Option<DbId>,
    pub tempo: Option<f64>,
    pub time_signature_numerator: Option<i32>,
    pub time_signature_denominator: Option<i32>,
    pub time_signature_varied: Option<bool>,
    pub minutes: Option<i32>,
    pub seconds: Option<i32>,
    pub samples: Option<String>,
    pub album_id: Option<DbId>,
    pub album_order: Option<i32>,
    pub date_created: Option<NaiveDate>,
    pub isrc_code: Option<String>,
    pub live_ready: Option<bool>,
    pub description: Option<String>,
}
