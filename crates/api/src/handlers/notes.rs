//! Handlers for the `/notes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use museboard_core::error::CoreError;
use museboard_core::types::DbId;
use museboard_db::models::note::{CreateNote, Note, UpdateNote};
use museboard_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/notes
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<Note>)> {
    if input.note.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "note must not be blank".into(),
        )));
    }
    let note = NoteRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/v1/tracks/{track_id}/notes
pub async fn list_by_track(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(track_id): Path<DbId>,
) -> AppResult<Json<Vec<Note>>> {
    let notes = NoteRepo::list_by_track(&state.pool, track_id).await?;
    Ok(Json(notes))
}

/// PUT /api/v1/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<Json<Note>> {
    let note = NoteRepo::update(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;
    Ok(Json(note))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Note", id }))
    }
}
