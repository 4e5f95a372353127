//! CSV-to-table decoding for objects fetched from S3
//!
//! Decodes raw delimited bytes into a single Arrow
//! [`RecordBatch`](arrow::record_batch::RecordBatch) according to an
//! explicit set of options.

use std::io::Cursor;
use std::sync::Arc;

use arrow::compute::concat_batches;
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use crate::error::{PipelineError, Result};

/// Options controlling how a fetched CSV object is decoded
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Whether the first row is a header
    pub has_header: bool,
    /// Field delimiter
    pub delimiter: u8,
    /// Decode only these columns, by header name
    pub columns: Option<Vec<String>>,
    /// Explicit schema; skips type inference entirely
    pub schema: Option<SchemaRef>,
    /// Rows sampled for type inference (ignored when `schema` is set)
    pub max_infer_records: Option<usize>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
            columns: None,
            schema: None,
            max_infer_records: Some(1000),
        }
    }
}

/// Decode raw CSV bytes into a single record batch.
///
/// Zero-byte input is the decoder's "no data" condition and fails with
/// [`PipelineError::EmptyCsv`]. A header-only input decodes to a zero-row
/// batch, which is a success.
pub(crate) fn decode_csv(bytes: &[u8], options: &CsvReadOptions) -> Result<RecordBatch> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyCsv);
    }

    let format = Format::default()
        .with_header(options.has_header)
        .with_delimiter(options.delimiter);

    let schema = match &options.schema {
        Some(schema) => schema.clone(),
        None => {
            let (inferred, _) =
                format.infer_schema(Cursor::new(bytes), options.max_infer_records)?;
            Arc::new(inferred)
        }
    };

    let mut builder = ReaderBuilder::new(schema.clone()).with_format(format);
    if let Some(names) = &options.columns {
        builder = builder.with_projection(resolve_columns(&schema, names)?);
    }

    let reader = builder.build(Cursor::new(bytes))?;
    let decoded_schema = reader.schema();
    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(concat_batches(&decoded_schema, &batches)?)
}

/// Map selected column names to indices in the decode schema.
fn resolve_columns(schema: &SchemaRef, names: &[String]) -> Result<Vec<usize>> {
    names
        .iter()
        .map(|name| {
            schema.index_of(name).map_err(|_| {
                PipelineError::Decode(format!("column '{name}' not present in CSV header"))
            })
        })
        .collect()
}
