//! # s3pipe - Thin S3 Convenience Facade
//!
//! s3pipe wraps the AWS S3 SDK behind a small set of methods that log every
//! outcome and signal failure through simple sentinels instead of error
//! types: uploads and downloads return `bool`, listings return an empty
//! `Vec`, and CSV reads return `Option<RecordBatch>`.
//!
//! ## Features
//!
//! - **Credential Chain**: client construction resolves credentials the
//!   standard way (environment, shared credential file, host-assigned role)
//! - **Simple Transfers**: single-call file upload and download
//! - **CSV to Arrow**: fetch a CSV object straight into an Arrow
//!   [`RecordBatch`](arrow::record_batch::RecordBatch)
//! - **Flattened Listings**: bucket names and paginated object keys as
//!   plain `Vec<String>`
//! - **S3-Compatible Endpoints**: MinIO, Ceph, and friends via endpoint and
//!   path-style overrides
//!
//! ## Quick Start
//!
//! ```no_run
//! use s3pipe::{CsvReadOptions, S3Pipeline};
//!
//! # async fn run() {
//! let pipeline = S3Pipeline::new().await.expect("S3 client");
//!
//! if pipeline.upload_file("report.csv", "analytics", None).await {
//!     let table = pipeline
//!         .read_csv_to_table("analytics", "report.csv", &CsvReadOptions::default())
//!         .await;
//!     println!("rows: {:?}", table.map(|t| t.num_rows()));
//! }
//! # }
//! ```
//!
//! ## Listing
//!
//! ```no_run
//! use s3pipe::S3Pipeline;
//!
//! # async fn run() {
//! let pipeline = S3Pipeline::new().await.expect("S3 client");
//!
//! for bucket in pipeline.list_buckets().await {
//!     for key in pipeline.list_objects(&bucket, "logs/").await {
//!         println!("{bucket}/{key}");
//!     }
//! }
//! # }
//! ```
//!
//! Failures are logged through [`tracing`]; the crate never installs a
//! subscriber, so the embedding application decides where the logs go.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use config::S3Config;
pub use error::{PipelineError, Result};
pub use pipeline::{CsvReadOptions, S3Pipeline};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use s3pipe::prelude::*;
    //! ```

    pub use crate::config::S3Config;
    pub use crate::error::{PipelineError, Result};
    pub use crate::pipeline::{CsvReadOptions, S3Pipeline};
}
