//! Connection settings for the S3 facade
//!
//! Every field is optional; anything left unset resolves through the SDK's
//! ambient chain (environment, shared credential file, host-assigned role).

use serde::{Deserialize, Serialize};

/// S3 connection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3Config {
    /// AWS region (e.g., "us-east-1")
    pub region: Option<String>,
    /// Custom endpoint URL (for MinIO, Ceph, etc.)
    pub endpoint: Option<String>,
    /// Access key ID (falls back to AWS credential chain)
    pub access_key_id: Option<String>,
    /// Secret access key (falls back to AWS credential chain)
    pub secret_access_key: Option<String>,
    /// Use path-style URLs (required for some S3-compatible services)
    pub force_path_style: bool,
}

impl S3Config {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self {
            region: std::env::var("AWS_REGION")
                .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
                .ok(),
            endpoint: std::env::var("AWS_ENDPOINT_URL")
                .ok()
                .or_else(|| std::env::var("S3_ENDPOINT").ok()),
            access_key_id: std::env::var("AWS_ACCESS_KEY_ID").ok(),
            secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
            force_path_style: std::env::var("S3_PATH_STYLE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Create config for MinIO
    pub fn minio(endpoint: &str, access_key: &str, secret_key: &str) -> Self {
        Self {
            endpoint: Some(endpoint.to_string()),
            access_key_id: Some(access_key.to_string()),
            secret_access_key: Some(secret_key.to_string()),
            force_path_style: true, // MinIO requires path-style
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.access_key_id.is_some() != self.secret_access_key.is_some() {
            return Err(
                "Static credentials require both an access key ID and a secret access key"
                    .to_string(),
            );
        }
        Ok(())
    }
}
