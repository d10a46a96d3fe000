//! Route definitions for the workflow resources (templates, track
//! statuses, steps).

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::workflow;
use crate::state::AppState;

/// Routes for `/templates`, `/track-statuses`, and `/steps`.
///
/// ```text
/// GET    /templates                                     -> list (?artist_id)
/// POST   /templates                                     -> create
/// GET    /templates/{id}                                -> get (with ordered statuses)
/// PUT    /templates/{id}                                -> update
/// DELETE /templates/{id}                                -> delete
/// GET    /templates/{id}/statuses                       -> ordered statuses
/// POST   /templates/{id}/statuses                       -> attach status
/// DELETE /templates/{template_id}/statuses/{status_id}  -> detach status
///
/// GET    /track-statuses                                -> list (?artist_id)
/// POST   /track-statuses                                -> create
/// GET    /track-statuses/{id}                           -> get (with ordered steps)
/// PUT    /track-statuses/{id}                           -> update
/// DELETE /track-statuses/{id}                           -> delete
/// GET    /track-statuses/{id}/steps                     -> ordered steps
/// POST   /track-statuses/{id}/steps                     -> attach step
/// DELETE /track-statuses/{status_id}/steps/{step_id}    -> detach step
///
/// GET    /steps                                         -> list (?artist_id)
/// POST   /steps                                         -> create
/// GET    /steps/{id}                                    -> get
/// PUT    /steps/{id}                                    -> update
/// DELETE /steps/{id}                                    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let template_routes = Router::new()
        .route(
            "/",
            get(workflow::list_templates).post(workflow::create_template),
        )
        .route(
            "/{id}",
            get(workflow::get_template)
                .put(workflow::update_template)
                .delete(workflow::delete_template),
        )
        .route(
            "/{id}/statuses",
            get(workflow::list_template_statuses).post(workflow::add_template_status),
        )
        .route(
            "/{template_id}/statuses/{status_id}",
            delete(workflow::remove_template_status),
        );

    let status_routes = Router::new()
        .route(
            "/",
            get(workflow::list_statuses).post(workflow::create_status),
        )
        .route(
            "/{id}",
            get(workflow::get_status)
                .put(workflow::update_status)
                .delete(workflow::delete_status),
        )
        .route(
            "/{id}/steps",
            get(workflow::list_status_steps).post(workflow::add_status_step),
        )
        .route(
            "/{status_id}/steps/{step_id}",
            delete(workflow::remove_status_step),
        );

    let step_routes = Router::new()
        .route("/", get(workflow::list_steps).post(workflow::create_step))
        .route(
            "/{id}",
            get(workflow::get_step)
                .put(workflow::update_step)
                .delete(workflow::delete_step),
        );

    Router::new()
        .nest("/templates", template_routes)
        .nest("/track-statuses", status_routes)
        .nest("/steps", step_routes)
}
