//! Route definitions for the `/tracks` resource, including nested note,
//! audio-file, and step-completion routes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{audio_files, notes, tracks};
use crate::state::AppState;

/// Routes mounted at `/tracks`.
///
/// ```text
/// POST   /                                      -> create
/// GET    /{id}                                  -> get_by_id
/// PUT    /{id}                                  -> update
/// DELETE /{id}                                  -> delete
/// GET    /{id}/notes                            -> notes::list_by_track
/// GET    /{id}/audio-files                      -> audio_files::list_by_track
/// GET    /{id}/completed-steps                  -> completed_steps
/// POST   /{track_id}/steps/{step_id}/complete   -> complete_step
/// DELETE /{track_id}/steps/{step_id}/complete   -> uncomplete_step
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tracks::create))
        .route(
            "/{id}",
            get(tracks::get_by_id)
                .put(tracks::update)
                .delete(tracks::delete),
        )
        .route("/{id}/notes", get(notes::list_by_track))
        .route("/{id}/audio-files", get(audio_files::list_by_track))
        .route("/{id}/completed-steps", get(tracks::completed_steps))
        .route(
            "/{track_id}/steps/{step_id}/complete",
            post(tracks::complete_step).delete(tracks::uncomplete_step),
        )
}
