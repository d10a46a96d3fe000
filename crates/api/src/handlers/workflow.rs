//! Handlers for the workflow resources: templates, track statuses, and steps.
//!
//! Templates hold an ordered list of statuses; statuses hold an ordered
//! list of steps. Ordering lives on the junction rows (`order_index`),
//! so attach/detach operations are the only way to reorder.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use museboard_core::error::CoreError;
use museboard_core::types::DbId;
use museboard_core::{slug, validate};
use museboard_db::models::step::{CreateStep, Step, UpdateStep};
use museboard_db::models::template::{
    AddTemplateStatus, CreateTemplate, Template, TemplateWithStatuses, UpdateTemplate,
};
use museboard_db::models::track_status::{
    AddStatusStep, CreateTrackStatus, TrackStatus, TrackStatusWithSteps, UpdateTrackStatus,
};
use museboard_db::repositories::{StepRepo, TemplateRepo, TrackStatusRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for workflow listings.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub artist_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// POST /api/v1/templates
pub async fn create_template(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateTemplate>,
) -> AppResult<(StatusCode, Json<Template>)> {
    validate::validate_name(&input.name)?;
    let template = TemplateRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /api/v1/templates?artist_id={id}
pub async fn list_templates(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Template>>> {
    let templates = TemplateRepo::list(&state.pool, query.artist_id).await?;
    Ok(Json(templates))
}

/// GET /api/v1/templates/{id}
///
/// Returns the template plus its statuses in workflow order.
pub async fn get_template(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TemplateWithStatuses>> {
    let template = TemplateRepo::find_with_statuses(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))?;
    Ok(Json(template))
}

/// PUT /api/v1/templates/{id}
pub async fn update_template(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTemplate>,
) -> AppResult<Json<Template>> {
    if let Some(name) = &input.name {
        validate::validate_name(name)?;
    }
    let template = TemplateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))?;
    Ok(Json(template))
}

/// DELETE /api/v1/templates/{id}
pub async fn delete_template(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TemplateRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id,
        }))
    }
}

/// GET /api/v1/templates/{id}/statuses
pub async fn list_template_statuses(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<TrackStatus>>> {
    let statuses = TemplateRepo::list_statuses(&state.pool, id).await?;
    Ok(Json(statuses))
}

/// POST /api/v1/templates/{id}/statuses
///
/// Attaching an already-attached status violates the junction's unique
/// constraint and surfaces as 409.
pub async fn add_template_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AddTemplateStatus>,
) -> AppResult<StatusCode> {
    let order_index = input.order_index.unwrap_or(0);
    validate::validate_order_index(order_index)?;
    TemplateRepo::add_status(&state.pool, id, input.track_status_id, order_index).await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /api/v1/templates/{template_id}/statuses/{status_id}
pub async fn remove_template_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((template_id, status_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    TemplateRepo::remove_status(&state.pool, template_id, status_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Track statuses
// ---------------------------------------------------------------------------

/// POST /api/v1/track-statuses
pub async fn create_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateTrackStatus>,
) -> AppResult<(StatusCode, Json<TrackStatus>)> {
    validate::validate_name(&input.name)?;
    let key = match &input.key {
        Some(explicit) => explicit.clone(),
        None => {
            let base = slug::normalize(&input.name);
            slug::resolve_unique(
                &base,
                |candidate| TrackStatusRepo::key_exists(&state.pool, candidate),
                slug::DEFAULT_MAX_ATTEMPTS,
            )
            .await?
        }
    };
    let status = TrackStatusRepo::create(&state.pool, &input, &key).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

/// GET /api/v1/track-statuses?artist_id={id}
pub async fn list_statuses(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<TrackStatus>>> {
    let statuses = TrackStatusRepo::list(&state.pool, query.artist_id).await?;
    Ok(Json(statuses))
}

/// GET /api/v1/track-statuses/{id}
///
/// Returns the status plus its steps in workflow order.
pub async fn get_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TrackStatusWithSteps>> {
    let status = TrackStatusRepo::find_with_steps(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TrackStatus",
            id,
        }))?;
    Ok(Json(status))
}

/// PUT /api/v1/track-statuses/{id}
pub async fn update_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTrackStatus>,
) -> AppResult<Json<TrackStatus>> {
    if let Some(name) = &input.name {
        validate::validate_name(name)?;
    }
    let status = TrackStatusRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TrackStatus",
            id,
        }))?;
    Ok(Json(status))
}

/// DELETE /api/v1/track-statuses/{id}
pub async fn delete_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TrackStatusRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TrackStatus",
            id,
        }))
    }
}

/// GET /api/v1/track-statuses/{id}/steps
pub async fn list_status_steps(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Step>>> {
    let steps = TrackStatusRepo::list_steps(&state.pool, id).await?;
    Ok(Json(steps))
}

/// POST /api/v1/track-statuses/{id}/steps
pub async fn add_status_step(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AddStatusStep>,
) -> AppResult<StatusCode> {
    let order_index = input.order_index.unwrap_or(0);
    validate::validate_order_index(order_index)?;
    TrackStatusRepo::add_step(&state.pool, id, input.step_id, order_index).await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /api/v1/track-statuses/{status_id}/steps/{step_id}
pub async fn remove_status_step(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((status_id, step_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    TrackStatusRepo::remove_step(&state.pool, status_id, step_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// POST /api/v1/steps
pub async fn create_step(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateStep>,
) -> AppResult<(StatusCode, Json<Step>)> {
    validate::validate_name(&input.name)?;
    if let Some(kind) = &input.kind {
        validate::validate_step_kind(kind)?;
    }
    let key = match &input.key {
        Some(explicit) => explicit.clone(),
        None => {
            let base = slug::normalize(&input.name);
            slug::resolve_unique(
                &base,
                |candidate| StepRepo::key_exists(&state.pool, candidate),
                slug::DEFAULT_MAX_ATTEMPTS,
            )
            .await?
        }
    };
    let step = StepRepo::create(&state.pool, &input, &key).await?;
    Ok((StatusCode::CREATED, Json(step)))
}

/// GET /api/v1/steps?artist_id={id}
pub async fn list_steps(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Step>>> {
    let steps = StepRepo::list(&state.pool, query.artist_id).await?;
    Ok(Json(steps))
}

/// GET /api/v1/steps/{id}
pub async fn get_step(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Step>> {
    let step = StepRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Step", id }))?;
    Ok(Json(step))
}

/// PUT /api/v1/steps/{id}
pub async fn update_step(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStep>,
) -> AppResult<Json<Step>> {
    if let Some(name) = &input.name {
        validate::validate_name(name)?;
    }
    if let Some(kind) = &input.kind {
        validate::validate_step_kind(kind)?;
    }
    let step = StepRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Step", id }))?;
    Ok(Json(step))
}

/// DELETE /api/v1/steps/{id}
pub async fn delete_step(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StepRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Step", id }))
    }
}
