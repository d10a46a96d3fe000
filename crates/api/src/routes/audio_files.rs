//! Route definitions for the `/audio-files` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::audio_files;
use crate::state::AppState;

/// Routes mounted at `/audio-files`. Listing happens under
/// `/tracks/{id}/audio-files`; bucket uploads go through `/uploads`.
///
/// ```text
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(audio_files::create))
        .route(
            "/{id}",
            get(audio_files::get_by_id)
                .put(audio_files::update)
                .delete(audio_files::delete),
        )
}
