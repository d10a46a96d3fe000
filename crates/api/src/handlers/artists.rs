//! Handlers for the `/artists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use museboard_core::error::CoreError;
use museboard_core::types::DbId;
use museboard_core::{slug, validate};
use museboard_db::models::artist::{Artist, CreateArtist, UpdateArtist};
use museboard_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateArtist>,
) -> AppResult<(StatusCode, Json<Artist>)> {
    validate::validate_name(&input.name)?;
    let slug = match &input.slug {
        Some(explicit) => explicit.clone(),
        None => {
            let base = slug::normalize(&input.name);
            slug::resolve_unique(
                &base,
                |candidate| ArtistRepo::slug_exists(&state.pool, candidate),
                slug::DEFAULT_MAX_ATTEMPTS,
            )
            .await?
        }
    };
    let artist = ArtistRepo::create(&state.pool, &input, &slug).await?;
    Ok((StatusCode::CREATED, Json(artist)))
}

/// GET /api/v1/artists
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Artist>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(artists))
}

/// GET /api/v1/artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Artist>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))?;
    Ok(Json(artist))
}

/// PUT /api/v1/artists/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtist>,
) -> AppResult<Json<Artist>> {
    if let Some(name) = &input.name {
        validate::validate_name(name)?;
    }
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))?;
    Ok(Json(artist))
}

/// DELETE /api/v1/artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ArtistRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))
    }
}
