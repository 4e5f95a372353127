//! S3 pipeline facade
//!
//! One client handle, built once from the ambient credential chain, behind
//! methods that log every outcome and report failure through sentinels:
//! `false` for transfers, an empty `Vec` for listings, `None` for CSV reads.
//! Construction is the only operation that surfaces an error to the caller.

use std::path::Path;

use arrow::record_batch::RecordBatch;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::{error, info};

use super::csv::{decode_csv, CsvReadOptions};
use crate::config::S3Config;
use crate::error::{PipelineError, Result};

/// Thin facade over the AWS S3 client
#[derive(Clone)]
pub struct S3Pipeline {
    client: Client,
}

impl S3Pipeline {
    /// Create a pipeline with default configuration.
    ///
    /// Region, endpoint, and credentials all resolve through the SDK's
    /// ambient chain: environment variables, the shared credential file,
    /// then the host-assigned role.
    pub async fn new() -> Result<Self> {
        Self::with_config(S3Config::default()).await
    }

    /// Create a pipeline from explicit configuration.
    ///
    /// This is the only operation that propagates an error; every other
    /// method logs failures and returns its sentinel instead.
    pub async fn with_config(config: S3Config) -> Result<Self> {
        config.validate().map_err(PipelineError::Config)?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = config.region.clone() {
            loader = loader.region(aws_config::Region::new(region));
        }

        // Custom endpoint for S3-compatible services
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint.as_str());
        }

        // Explicit credentials short-circuit the chain when provided
        if let (Some(key_id), Some(secret)) = (&config.access_key_id, &config.secret_access_key)
        {
            let creds = aws_credential_types::Credentials::new(
                key_id.as_str(),
                secret.as_str(),
                None, // session token
                None, // expiry
                "s3pipe-static",
            );
            loader = loader.credentials_provider(creds);
        }

        let shared = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if config.force_path_style {
            builder = builder.force_path_style(true);
        }

        let client = Client::from_conf(builder.build());
        info!("Initialized S3 client");

        Ok(Self { client })
    }

    /// Wrap an already-built S3 client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Upload a local file to `bucket` under `key`.
    ///
    /// When `key` is `None` the local path string is used as the object
    /// key. Returns `true` on success; any failure is logged and returns
    /// `false`.
    pub async fn upload_file(
        &self,
        local_path: impl AsRef<Path>,
        bucket: &str,
        key: Option<&str>,
    ) -> bool {
        let local_path = local_path.as_ref();
        let key = key
            .map(str::to_owned)
            .unwrap_or_else(|| local_path.to_string_lossy().into_owned());

        match self.try_upload(local_path, bucket, &key).await {
            Ok(()) => {
                info!("Uploaded {} to {}/{}", local_path.display(), bucket, key);
                true
            }
            Err(e) => {
                error!("Failed to upload {}: {}", local_path.display(), e);
                false
            }
        }
    }

    async fn try_upload(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()> {
        let body = ByteStream::from_path(local_path).await.map_err(|e| {
            PipelineError::io(
                local_path,
                std::io::Error::new(std::io::ErrorKind::Other, e),
            )
        })?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| PipelineError::service("put_object", DisplayErrorContext(&e)))?;

        Ok(())
    }

    /// Download `bucket`/`key` to a local file.
    ///
    /// Parent directories are created as needed. Returns `true` on
    /// success; any failure is logged and returns `false`.
    pub async fn download_file(
        &self,
        bucket: &str,
        key: &str,
        local_path: impl AsRef<Path>,
    ) -> bool {
        let local_path = local_path.as_ref();

        match self.try_download(bucket, key, local_path).await {
            Ok(bytes) => {
                info!(
                    "Downloaded {}/{} to {} ({} bytes)",
                    bucket,
                    key,
                    local_path.display(),
                    bytes
                );
                true
            }
            Err(e) => {
                error!("Failed to download {}/{}: {}", bucket, key, e);
                false
            }
        }
    }

    async fn try_download(&self, bucket: &str, key: &str, local_path: &Path) -> Result<u64> {
        let data = self.try_fetch_object(bucket, key).await?;

        if let Some(parent) = local_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PipelineError::io(parent, e))?;
        }

        tokio::fs::write(local_path, &data)
            .await
            .map_err(|e| PipelineError::io(local_path, e))?;

        Ok(data.len() as u64)
    }

    /// Read a CSV object straight into an Arrow [`RecordBatch`].
    ///
    /// Returns `None` when the service call fails (the decoder is never
    /// invoked), when the fetched content is empty, or when decoding
    /// fails; each cause is logged distinctly.
    pub async fn read_csv_to_table(
        &self,
        bucket: &str,
        key: &str,
        options: &CsvReadOptions,
    ) -> Option<RecordBatch> {
        match self.try_read_csv(bucket, key, options).await {
            Ok(batch) => {
                info!(
                    "Read CSV {}/{} into {} rows",
                    bucket,
                    key,
                    batch.num_rows()
                );
                Some(batch)
            }
            Err(e @ PipelineError::Service { .. }) => {
                error!("Failed to read CSV from S3: {}", e);
                None
            }
            Err(PipelineError::EmptyCsv) => {
                error!("CSV object {}/{} is empty", bucket, key);
                None
            }
            Err(e) => {
                error!("Error processing CSV object {}/{}: {}", bucket, key, e);
                None
            }
        }
    }

    async fn try_read_csv(
        &self,
        bucket: &str,
        key: &str,
        options: &CsvReadOptions,
    ) -> Result<RecordBatch> {
        let data = self.try_fetch_object(bucket, key).await?;
        decode_csv(&data, options)
    }

    async fn try_fetch_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| PipelineError::service("get_object", DisplayErrorContext(&e)))?;

        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| PipelineError::service("get_object", DisplayErrorContext(&e)))?;

        Ok(body.into_bytes().to_vec())
    }

    /// List all buckets visible to the current credentials.
    ///
    /// Names come back in service order. Any failure is logged and
    /// returns an empty vector, indistinguishable from zero buckets.
    pub async fn list_buckets(&self) -> Vec<String> {
        match self.try_list_buckets().await {
            Ok(buckets) => {
                info!("Listed {} buckets", buckets.len());
                buckets
            }
            Err(e) => {
                error!("Failed to list buckets: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_list_buckets(&self) -> Result<Vec<String>> {
        let resp = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| PipelineError::service("list_buckets", DisplayErrorContext(&e)))?;

        Ok(resp
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(str::to_owned))
            .collect())
    }

    /// List object keys in `bucket` starting with `prefix`.
    ///
    /// Flattens every page of the listing, preserving page order and
    /// within-page order. Any failure is logged and returns an empty
    /// vector, indistinguishable from zero matches.
    pub async fn list_objects(&self, bucket: &str, prefix: &str) -> Vec<String> {
        match self.try_list_objects(bucket, prefix).await {
            Ok(keys) => {
                info!("Listed {} objects in {}", keys.len(), bucket);
                keys
            }
            Err(e) => {
                error!("Failed to list objects in {}: {}", bucket, e);
                Vec::new()
            }
        }
    }

    async fn try_list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        let mut req = self.client.list_objects_v2().bucket(bucket);
        if !prefix.is_empty() {
            req = req.prefix(prefix);
        }

        let mut pages = req.into_paginator().send();
        let mut keys = Vec::new();

        while let Some(page) = pages.next().await {
            let page = page
                .map_err(|e| PipelineError::service("list_objects_v2", DisplayErrorContext(&e)))?;
            keys.extend(page.contents().iter().filter_map(|o| o.key().map(str::to_owned)));
        }

        Ok(keys)
    }
}
