//! Album entity model and DTOs.

use chrono::NaiveDate;
use museboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::track::Track;

/// A row from the `albums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Album {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub artist_id: DbId,
    pub release_date: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new album.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlbum {
    pub name: String,
    /// Explicit slug override; resolved from `name` when omitted.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub artist_id: DbId,
    pub release_date: Option<NaiveDate>,
    pub image_url: Option<String>,
}

/// DTO for updating an existing album. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAlbum {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub image_url: Option<String>,
}

/// An album together with its tracks, sorted by `album_order` (unordered
/// tracks last).
#[derive(Debug, Serialize)]
pub struct AlbumWithTracks {
    #[serde(flatten)]
    pub album: Album,
    pub tracks: Vec<Track>,
}
