//! Handlers for the `/audio-files` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use museboard_core::error::CoreError;
use museboard_core::types::DbId;
use museboard_core::validate;
use museboard_db::models::audio_file::{AudioFile, CreateAudioFile, UpdateAudioFile};
use museboard_db::repositories::AudioFileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/audio-files
///
/// Records an externally hosted file (e.g. a Dropbox link). Files uploaded
/// through the bucket go through `/uploads/complete` instead.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateAudioFile>,
) -> AppResult<(StatusCode, Json<AudioFile>)> {
    validate::validate_name(&input.name)?;
    let record = AudioFileRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/tracks/{track_id}/audio-files
pub async fn list_by_track(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(track_id): Path<DbId>,
) -> AppResult<Json<Vec<AudioFile>>> {
    let files = AudioFileRepo::list_by_track(&state.pool, track_id).await?;
    Ok(Json(files))
}

/// GET /api/v1/audio-files/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<AudioFile>> {
    let record = AudioFileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AudioFile",
            id,
        }))?;
    Ok(Json(record))
}

/// PUT /api/v1/audio-files/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAudioFile>,
) -> AppResult<Json<AudioFile>> {
    if let Some(name) = &input.name {
        validate::validate_name(name)?;
    }
    let record = AudioFileRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AudioFile",
            id,
        }))?;
    Ok(Json(record))
}

/// DELETE /api/v1/audio-files/{id}
///
/// Removes the database record, then best-effort deletes the backing
/// object when the file lives in our bucket. A failed bucket delete is
/// logged, not surfaced: the record is already gone.
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let record = AudioFileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AudioFile",
            id,
        }))?;

    AudioFileRepo::delete(&state.pool, id).await?;

    if let (Some(storage), Some(file_url)) = (&state.storage, record.file_url.as_deref()) {
        // public_url("") yields the bucket's base URL with trailing slash.
        if let Some(key) = file_url.strip_prefix(&storage.public_url("")) {
            if let Err(err) = storage.delete(key).await {
                tracing::warn!(error = %err, key, "Failed to delete stored object");
            }
        }
    }

    Ok(StatusCode::NO_CONTENT)
}
