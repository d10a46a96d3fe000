/// Object storage configuration loaded from environment variables.
///
/// All credentials are required for storage to be enabled; there are no
/// defaults. A deployment without them runs with uploads disabled.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Cloudflare R2 account ID (forms the S3 endpoint hostname).
    pub account_id: String,
    /// Access key ID for the bucket.
    pub access_key_id: String,
    /// Secret access key for the bucket.
    pub secret_access_key: String,
    /// Bucket name.
    pub bucket: String,
    /// Public base URL the bucket is served from (custom domain or
    /// `r2.dev` subdomain), without a trailing slash.
    pub public_base_url: String,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Required |
    /// |------------------------|----------|
    /// | `R2_ACCOUNT_ID`        | yes      |
    /// | `R2_ACCESS_KEY_ID`     | yes      |
    /// | `R2_SECRET_ACCESS_KEY` | yes      |
    /// | `R2_BUCKET`            | yes      |
    /// | `R2_PUBLIC_BASE_URL`   | yes      |
    ///
    /// Returns `None` when any variable is missing, which disables the
    /// upload endpoints rather than failing startup.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            account_id: std::env::var("R2_ACCOUNT_ID").ok()?,
            access_key_id: std::env::var("R2_ACCESS_KEY_ID").ok()?,
            secret_access_key: std::env::var("R2_SECRET_ACCESS_KEY").ok()?,
            bucket: std::env::var("R2_BUCKET").ok()?,
            public_base_url: std::env::var("R2_PUBLIC_BASE_URL")
                .ok()?
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// S3-compatible endpoint URL for this account.
    pub fn endpoint_url(&self) -> String {
        format!("https://{}.r2.cloudflarestorage.com", self.account_id)
    }
}
