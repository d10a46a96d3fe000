//! Object storage integration for audio mixdowns.
//!
//! Uploads go straight from the browser to an S3-compatible bucket via
//! presigned URLs; the API only hands out URLs and verifies the object
//! afterwards. Storage is optional at runtime: when the bucket is not
//! configured the upload endpoints are simply unavailable.

pub mod config;
pub mod error;
pub mod keys;
pub mod store;

pub use config::StorageConfig;
pub use error::StorageError;
pub use store::{ObjectStore, StorageProvider};
