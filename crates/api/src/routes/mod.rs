pub mod albums;
pub mod artists;
pub mod audio_files;
pub mod health;
pub mod notes;
pub mod tracks;
pub mod uploads;
pub mod workflow;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /artists                                      list, create
/// /artists/{id}                                 get, update, delete
/// /artists/{artist_id}/tracks                   list tracks by artist
///
/// /albums                                       list (?artist_id), create
/// /albums/{id}                                  get, update, delete
/// /albums/{id}/tracks                           album with ordered tracks
///
/// /tracks                                       create
/// /tracks/{id}                                  get, update, delete
/// /tracks/{id}/notes                            list notes
/// /tracks/{id}/audio-files                      list audio files
/// /tracks/{id}/completed-steps                  completed step ids
/// /tracks/{track_id}/steps/{step_id}/complete   complete (POST), uncomplete (DELETE)
///
/// /notes                                        create
/// /notes/{id}                                   update, delete
///
/// /audio-files                                  create
/// /audio-files/{id}                             get, update, delete
///
/// /templates                                    list (?artist_id), create
/// /templates/{id}                               get (with statuses), update, delete
/// /templates/{id}/statuses                      ordered list, attach (POST)
/// /templates/{template_id}/statuses/{status_id} detach (DELETE)
///
/// /track-statuses                               list (?artist_id), create
/// /track-statuses/{id}                          get (with steps), update, delete
/// /track-statuses/{id}/steps                    ordered list, attach (POST)
/// /track-statuses/{status_id}/steps/{step_id}   detach (DELETE)
///
/// /steps                                        list (?artist_id), create
/// /steps/{id}                                   get, update, delete
///
/// /uploads/init                                 presigned upload URL (POST)
/// /uploads/complete                             record uploaded file (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artists", artists::router())
        .nest("/albums", albums::router())
        .nest("/tracks", tracks::router())
        .nest("/notes", notes::router())
        .nest("/audio-files", audio_files::router())
        .merge(workflow::router())
        .nest("/uploads", uploads::router())
}
