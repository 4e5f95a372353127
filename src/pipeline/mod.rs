//! Storage facade module
//!
//! Exposes the S3 pipeline facade and the CSV decoding options it accepts.

mod client;
mod csv;

pub use client::*;
pub use csv::*;
