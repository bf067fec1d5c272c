//! VCSV parsing pipeline
//!
//! Orchestrates the stages: line classification, header extraction, schema
//! resolution, numeric grid construction, table assembly. Every stage fails
//! fast; the first violated invariant aborts the whole parse.

use crate::reader::{classify_lines, RawRecord};
use crate::types::{FormatMetadata, Result, VcsvResult};
use crate::{grid, header, schema, table};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::instrument;

/// Run the full pipeline over an already-classified record.
pub fn parse_record(record: RawRecord) -> Result<VcsvResult> {
    let fields = header::parse_header(&record.header_lines)?;
    let resolved = schema::resolve_signals(&fields.signal_line)?;
    let grid = grid::build_grid(&record.data_rows, resolved.schema.num_signals())?;
    let table = table::assemble(&resolved, grid)?;

    Ok(VcsvResult {
        metadata: FormatMetadata {
            version: fields.version,
            signals: resolved.declarations,
            axis_kinds: fields.axis_kinds,
            data_kinds: fields.data_kinds,
            data_info: fields.data_info,
            units: fields.units,
        },
        table,
    })
}

/// Main VCSV file reader.
///
/// The file handle is dropped as soon as line classification completes or
/// fails; the parse itself runs over the in-memory record.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn vcsv_read_impl<P: AsRef<Path>>(path: P) -> Result<VcsvResult> {
    let file = File::open(path.as_ref())?;
    let record = classify_lines(BufReader::new(file))?;
    parse_record(record)
}
