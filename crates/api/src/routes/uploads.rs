//! Route definitions for the `/uploads` flow.

use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST /init      -> presigned upload URL
/// POST /complete  -> verify + record uploaded file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/init", post(uploads::init))
        .route("/complete", post(uploads::complete))
}
