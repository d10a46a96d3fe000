//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod album;
pub mod artist;
pub mod audio_file;
pub mod note;
pub mod step;
pub mod template;
pub mod track;
pub mod track_status;
pub mod track_step;
