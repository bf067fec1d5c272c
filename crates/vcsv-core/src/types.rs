//! Common types, errors, and constants for VCSV file operations

use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Marker character that opens a metadata line
pub const METADATA_MARKER: char = ';';

/// Number of metadata lines that make up the fixed header
pub const HEADER_LINE_COUNT: usize = 6;

/// The only supported axis-kind declaration (swept X, measured Y)
pub const AXIS_KIND_XY: &str = "X, Y";

/// The only supported data-type-kind declaration (real/real pairs)
pub const DATA_KIND_REAL: &str = "Re, Re";

// ============================================================================
// Error Types
// ============================================================================

/// Error type for VCSV reading operations
#[derive(Debug, Error)]
pub enum VcsvError {
    /// File open/read failure at the line-source boundary
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural header or data-layout violation
    #[error("format error: {0}")]
    Format(String),

    /// Cross-signal schema inconsistency
    #[error("schema error: {0}")]
    Schema(String),

    /// Malformed numeric token or declaration syntax
    #[error("parse error: {0}")]
    Parse(String),

    /// Constructed table does not match the resolved cardinality
    #[error("shape error: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, VcsvError>;

// ============================================================================
// Data Structures
// ============================================================================

/// A declared signal instance: a name plus its ordered parameter assignments.
///
/// Parameter values are kept as text here; they are converted to floats only
/// when the parameterized table index is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalDeclaration {
    pub name: String,
    /// (name, value) pairs in declaration order; empty for a bare signal
    pub parameters: Vec<(String, String)>,
}

impl SignalDeclaration {
    /// Ordered parameter names of this declaration
    pub fn param_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|(n, _)| n.as_str()).collect()
    }
}

/// Parsed six-line VCSV header
#[derive(Debug, Clone, PartialEq)]
pub struct FormatMetadata {
    /// Version string from line 0, if declared
    pub version: Option<String>,
    /// Signal declarations from line 1 (bare names or parameterized instances)
    pub signals: Vec<SignalDeclaration>,
    /// Collapsed axis-kind tags from line 2 (must be exactly `["X, Y"]`)
    pub axis_kinds: Vec<String>,
    /// Collapsed data-type-kind tags from line 3 (must be exactly `["Re, Re"]`)
    pub data_kinds: Vec<String>,
    /// Collapsed data-info tags from line 4
    pub data_info: Vec<String>,
    /// Collapsed unit tags from line 5
    pub units: Vec<String>,
}

/// Result of a VCSV file read: the metadata record and the assembled table
#[derive(Debug, Clone, PartialEq)]
pub struct VcsvResult {
    pub metadata: FormatMetadata,
    pub table: crate::table::SweepTable,
}
