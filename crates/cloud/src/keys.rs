//! Object key generation for uploaded audio.

use museboard_core::types::DbId;
use rand::Rng;

/// Length of the random component in generated object keys.
const KEY_RANDOM_LENGTH: usize = 12;

/// Fallback extension when the client supplies nothing usable.
const DEFAULT_EXTENSION: &str = "bin";

/// Generate a bucket key for an audio upload.
///
/// Keys are namespaced per track and never reused: a millisecond
/// timestamp plus a random suffix keeps concurrent uploads for the same
/// track from colliding. Shape: `audio/{track_id}/{millis}-{random}.{ext}`.
pub fn object_key(track_id: DbId, file_name: &str) -> String {
    let random: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(KEY_RANDOM_LENGTH)
        .map(char::from)
        .collect();
    let millis = chrono::Utc::now().timestamp_millis();
    let ext = extension_of(file_name);
    format!("audio/{track_id}/{millis}-{random}.{ext}")
}

/// Extract a safe lowercase extension from a client-supplied file name.
fn extension_of(file_name: &str) -> String {
    let Some((stem, ext)) = file_name.rsplit_once('.') else {
        return DEFAULT_EXTENSION.to_string();
    };
    let ext = ext.to_ascii_lowercase();
    if stem.is_empty()
        || ext.is_empty()
        || ext.len() > 8
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        DEFAULT_EXTENSION.to_string()
    } else {
        ext
    }
}
