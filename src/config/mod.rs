//! Configuration module for s3pipe
//!
//! Provides the connection settings used to build the S3 client.

mod settings;

pub use settings::*;
