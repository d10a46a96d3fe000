//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Reads tolerate a missing
//! backing relation (see [`crate::relation`]); everything else propagates
//! `sqlx::Error` unchanged.

pub mod album_repo;
pub mod artist_repo;
pub mod audio_file_repo;
pub mod note_repo;
pub mod step_repo;
pub mod template_repo;
pub mod track_repo;
pub mod track_status_repo;
pub mod track_step_repo;

pub use album_repo::AlbumRepo;
pub use artist_repo::ArtistRepo;
pub use audio_file_repo::AudioFileRepo;
pub use note_repo::NoteRepo;
pub use step_repo::StepRepo;
pub use template_repo::TemplateRepo;
pub use track_repo::TrackRepo;
pub use track_status_repo::TrackStatusRepo;
pub use track_step_repo::TrackStepRepo;
