//! Handlers for the `/albums` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use museboard_core::error::CoreError;
use museboard_core::types::DbId;
use museboard_core::{slug, validate};
use museboard_db::models::album::{Album, AlbumWithTracks, CreateAlbum, UpdateAlbum};
use museboard_db::repositories::AlbumRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for album listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub artist_id: Option<DbId>,
}

/// POST /api/v1/albums
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateAlbum>,
) -> AppResult<(StatusCode, Json<Album>)> {
    validate::validate_name(&input.name)?;
    let slug = match &input.slug {
        Some(explicit) => explicit.clone(),
        None => {
            let base = slug::normalize(&input.name);
            slug::resolve_unique(
                &base,
                |candidate| AlbumRepo::slug_exists(&state.pool, candidate),
                slug::DEFAULT_MAX_ATTEMPTS,
            )
            .await?
        }
    };
    let album = AlbumRepo::create(&state.pool, &input, &slug).await?;
    Ok((StatusCode::CREATED, Json(album)))
}

/// GET /api/v1/albums?artist_id={id}
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Album>>> {
    let albums = AlbumRepo::list(&state.pool, query.artist_id).await?;
    Ok(Json(albums))
}

/// GET /api/v1/albums/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Album>> {
    let album = AlbumRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Album", id }))?;
    Ok(Json(album))
}

/// GET /api/v1/albums/{id}/tracks
///
/// Returns the album plus its tracks sorted by `album_order`, with
/// unordered tracks at the end.
pub async fn get_with_tracks(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<AlbumWithTracks>> {
    let album = AlbumRepo::find_with_tracks(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Album", id }))?;
    Ok(Json(album))
}

/// PUT /api/v1/albums/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAlbum>,
) -> AppResult<Json<Album>> {
    if let Some(name) = &input.name {
        validate::validate_name(name)?;
    }
    let album = AlbumRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Album", id }))?;
    Ok(Json(album))
}

/// DELETE /api/v1/albums/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AlbumRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Album", id }))
    }
}
