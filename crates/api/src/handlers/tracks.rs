//! Handlers for the `/tracks` resource, including per-track step completion.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use museboard_core::error::CoreError;
use museboard_core::types::DbId;
use museboard_core::{slug, validate};
use museboard_db::models::track::{CreateTrack, Track, UpdateTrack};
use museboard_db::repositories::{TrackRepo, TrackStepRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/tracks
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateTrack>,
) -> AppResult<(StatusCode, Json<Track>)> {
    validate::validate_name(&input.name)?;
    let key = match &input.key {
        Some(explicit) => explicit.clone(),
        None => {
            let base = slug::normalize(&input.name);
            slug::resolve_unique(
                &base,
                |candidate| TrackRepo::key_exists(&state.pool, candidate),
                slug::DEFAULT_MAX_ATTEMPTS,
            )
            .await?
        }
    };
    let track = TrackRepo::create(&state.pool, auth.user_id, &input, &key).await?;
    Ok((StatusCode::CREATED, Json(track)))
}

/// GET /api/v1/artists/{artist_id}/tracks
pub async fn list_by_artist(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(artist_id): Path<DbId>,
) -> AppResult<Json<Vec<Track>>> {
    let tracks = TrackRepo::list_by_artist(&state.pool, artist_id).await?;
    Ok(Json(tracks))
}

/// GET /api/v1/tracks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Track>> {
    let track = TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Track", id }))?;
    Ok(Json(track))
}

/// PUT /api/v1/tracks/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrack>,
) -> AppResult<Json<Track>> {
    if let Some(name) = &input.name {
        validate::validate_name(name)?;
    }
    let track = TrackRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Track", id }))?;
    Ok(Json(track))
}

/// DELETE /api/v1/tracks/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TrackRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Track", id }))
    }
}

// ---------------------------------------------------------------------------
// Step completion
// ---------------------------------------------------------------------------

/// GET /api/v1/tracks/{id}/completed-steps
pub async fn completed_steps(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<DbId>>>> {
    let step_ids = TrackStepRepo::list_completed(&state.pool, id).await?;
    Ok(Json(DataResponse { data: step_ids }))
}

/// POST /api/v1/tracks/{track_id}/steps/{step_id}/complete
pub async fn complete_step(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((track_id, step_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    TrackStepRepo::complete(&state.pool, track_id, step_id, Some(auth.user_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/tracks/{track_id}/steps/{step_id}/complete
pub async fn uncomplete_step(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((track_id, step_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    TrackStepRepo::uncomplete(&state.pool, track_id, step_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
