//! Route definitions for the `/notes` resource.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Routes mounted at `/notes`. Listing happens under `/tracks/{id}/notes`.
///
/// ```text
/// POST   /      -> create
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(notes::create))
        .route("/{id}", put(notes::update).delete(notes::delete))
}
