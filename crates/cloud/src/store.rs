//! S3-compatible object store client.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;

use crate::config::StorageConfig;
use crate::error::StorageError;

/// How long a presigned upload URL stays valid.
const PRESIGN_EXPIRY_SECS: u64 = 3600;

/// Abstraction over the storage backend.
///
/// The API layer talks to this trait so tests can swap in a fake
/// without a bucket.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Presign a PUT for the given key, valid for one hour.
    async fn presign_put(&self, key: &str, content_type: &str) -> Result<String, StorageError>;

    /// Check whether an object exists; returns its size in bytes when it
    /// does.
    async fn head(&self, key: &str) -> Result<Option<i64>, StorageError>;

    /// Delete an object. Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Public URL the object is served from.
    fn public_url(&self, key: &str) -> String;
}

/// Production store backed by an S3-compatible bucket.
pub struct ObjectStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl ObjectStore {
    /// Build a client from static credentials against the configured
    /// endpoint. R2 ignores the region but the SDK requires one.
    pub fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "museboard",
        );
        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("auto"))
            .endpoint_url(config.endpoint_url())
            .credentials_provider(credentials)
            .build();
        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }
}

#[async_trait]
impl StorageProvider for ObjectStore {
    async fn presign_put(&self, key: &str, content_type: &str) -> Result<String, StorageError> {
        let presigning = PresigningConfig::expires_in(Duration::from_secs(PRESIGN_EXPIRY_SECS))
            .map_err(|e| StorageError::Presign(e.to_string()))?;
        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;
        Ok(presigned.uri().to_string())
    }

    async fn head(&self, key: &str) -> Result<Option<i64>, StorageError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => Ok(output.content_length()),
            Err(err) => {
                let service = err.into_service_error();
                if service.is_not_found() {
                    Ok(None)
                } else {
                    Err(StorageError::Request(service.to_string()))
                }
            }
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;
        tracing::debug!(key, "Deleted object");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}
