//! Handlers for the direct-to-bucket upload flow.
//!
//! The browser asks for a presigned PUT URL (`init`), uploads the bytes
//! itself, then reports back (`complete`); only then does the audio-file
//! record exist. Both endpoints return 400 when storage is unconfigured.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use museboard_cloud::{keys, StorageProvider};
use museboard_core::error::CoreError;
use museboard_core::types::DbId;
use museboard_core::{slug, validate};
use museboard_db::models::audio_file::{AudioFile, CreateAudioFile};
use museboard_db::repositories::{AudioFileRepo, TrackRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /uploads/init`.
#[derive(Debug, Deserialize)]
pub struct InitUpload {
    pub track_id: DbId,
    pub file_name: String,
    pub content_type: Option<String>,
}

/// Response payload for `POST /uploads/init`.
#[derive(Debug, Serialize)]
pub struct UploadTicket {
    /// Bucket key the client must PUT to.
    pub key: String,
    /// Presigned PUT URL, valid for one hour.
    pub upload_url: String,
    /// URL the object will be served from once uploaded.
    pub public_url: String,
}

/// Request body for `POST /uploads/complete`.
#[derive(Debug, Deserialize)]
pub struct CompleteUpload {
    pub track_id: DbId,
    pub key: String,
    pub name: String,
    pub mixdown_date: Option<NaiveDate>,
    pub description: Option<String>,
}

fn require_storage(state: &AppState) -> Result<&Arc<dyn StorageProvider>, AppError> {
    state
        .storage
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("Object storage is not configured".into()))
}

/// POST /api/v1/uploads/init
pub async fn init(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<InitUpload>,
) -> AppResult<Json<DataResponse<UploadTicket>>> {
    let storage = require_storage(&state)?;

    TrackRepo::find_by_id(&state.pool, input.track_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id: input.track_id,
        }))?;

    let key = keys::object_key(input.track_id, &input.file_name);
    let content_type = input
        .content_type
        .as_deref()
        .unwrap_or("application/octet-stream");
    let upload_url = storage.presign_put(&key, content_type).await?;
    let public_url = storage.public_url(&key);

    tracing::info!(track_id = input.track_id, key, "Issued upload ticket");

    Ok(Json(DataResponse {
        data: UploadTicket {
            key,
            upload_url,
            public_url,
        },
    }))
}

/// POST /api/v1/uploads/complete
///
/// Verifies the object actually landed in the bucket before recording it.
pub async fn complete(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CompleteUpload>,
) -> AppResult<(StatusCode, Json<AudioFile>)> {
    let storage = require_storage(&state)?;
    validate::validate_name(&input.name)?;

    TrackRepo::find_by_id(&state.pool, input.track_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id: input.track_id,
        }))?;

    let size = storage.head(&input.key).await?;
    let Some(size_bytes) = size else {
        return Err(AppError::BadRequest(format!(
            "No uploaded object found at key '{}'",
            input.key
        )));
    };

    let record = AudioFileRepo::create(
        &state.pool,
        auth.user_id,
        &CreateAudioFile {
            name: input.name.clone(),
            slug: slug::normalize(&input.name),
            file_url: Some(storage.public_url(&input.key)),
            dropbox_url: None,
            track_id: input.track_id,
            mixdown_date: input.mixdown_date,
            description: input.description.clone(),
        },
    )
    .await?;

    tracing::info!(
        track_id = input.track_id,
        key = input.key,
        size_bytes,
        audio_file_id = record.id,
        "Upload recorded"
    );

    Ok((StatusCode::CREATED, Json(record)))
}
