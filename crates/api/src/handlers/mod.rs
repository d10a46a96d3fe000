pub mod albums;
pub mod artists;
pub mod audio_files;
pub mod notes;
pub mod tracks;
pub mod uploads;
pub mod workflow;
