//! # VCSV Sweep Parser - Core Library
//!
//! A library for parsing Cadence Virtuoso VCSV sweep export files into
//! typed in-memory tables with labeled axes.
//!
//! ## Format
//!
//! A VCSV file carries two line classes: metadata lines prefixed with `;`
//! (the first six encode version, signal declarations, axis kind, data-type
//! kind, data-info, and units) and comma-separated numeric data lines with
//! an even column count, alternating axis-value/signal-value pairs.
//!
//! Two table shapes come out of a parse:
//!
//! - **Flat**: bare signal names, one row per axis value, one column per
//!   signal.
//! - **Parameterized**: a sweep of one signal over parameter combinations,
//!   one row per combination indexed by its parameter-value tuple, one
//!   column per axis value.
//!
//! Only real-valued X/Y data with a single shared x-axis is supported;
//! anything else is rejected with a typed error.
//!
//! ## Quick Start
//!
//! ```rust
//! let input = "\
//! ;Version 1.0
//! ;Sig (p=1);Sig (p=2)
//! ;X, Y
//! ;Re, Re
//! ;info
//! ;V
//! 0,1,0,2
//! 1,3,1,4";
//!
//! let result = vcsv_core::parse_str(input).unwrap();
//! assert_eq!(result.metadata.version.as_deref(), Some("1.0"));
//!
//! let table = result.table.as_param().unwrap();
//! assert_eq!(table.axis, vec![0.0, 1.0]);
//! assert_eq!(table.row(&[2.0]), Some(&[2.0, 4.0][..]));
//! ```
//!
//! Reading from a file:
//!
//! ```rust,no_run
//! let result = vcsv_core::read("sweep.vcsv").unwrap();
//! if let Some(flat) = result.table.as_flat() {
//!     for name in &flat.signal_names {
//!         println!("{}: {} points", name, flat.axis.len());
//!     }
//! }
//! ```
//!
//! ## Enabling Logging
//!
//! This library uses `tracing` for structured diagnostics. Initialize a
//! tracing subscriber in your application to see per-stage log output:
//!
//! ```rust,ignore
//! tracing_subscriber::fmt::init();
//!
//! let result = vcsv_core::read("sweep.vcsv").unwrap();
//! ```

mod grid;
mod header;
mod parser;
mod reader;
mod schema;
mod table;
mod types;

// Re-export public types
pub use types::{
    FormatMetadata,
    Result,
    SignalDeclaration,
    VcsvError,
    VcsvResult,
    // Format constants
    AXIS_KIND_XY,
    DATA_KIND_REAL,
    HEADER_LINE_COUNT,
    METADATA_MARKER,
};

pub use grid::{AxisShape, NumericGrid};
pub use schema::{SignalSchema, SignalToken};
pub use table::{FlatTable, ParamTable, SweepTable};

// ============================================================================
// Public API Functions
// ============================================================================

/// Read and parse a VCSV file.
///
/// # Arguments
/// * `path` - Path to the VCSV file
///
/// # Returns
/// * `Ok(VcsvResult)` - Parsed metadata record and sweep table
/// * `Err(VcsvError)` - If the file cannot be read or violates the format
///
/// # Example
/// ```rust,no_run
/// let result = vcsv_core::read("sweep.vcsv").unwrap();
/// println!("{} axis points", result.table.axis().len());
/// ```
pub fn read<P: AsRef<std::path::Path>>(path: P) -> Result<VcsvResult> {
    parser::vcsv_read_impl(path)
}

/// Parse VCSV content from an in-memory string.
///
/// Any line-oriented byte source reduces to this; the pipeline is identical
/// to [`read`].
pub fn parse_str(input: &str) -> Result<VcsvResult> {
    parser::parse_record(reader::classify_lines(input.as_bytes())?)
}
