//! VCSV metadata header extraction
//!
//! Interprets the six fixed metadata lines: version, signal declarations,
//! axis kind, data-type kind, data-info, and units. The signal-declaration
//! line is passed through raw; resolving it is the schema module's job.

use crate::types::{Result, VcsvError, AXIS_KIND_XY, DATA_KIND_REAL, HEADER_LINE_COUNT};
use tracing::debug;

/// Fields extracted from the fixed header, signal line still unresolved
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFields {
    pub version: Option<String>,
    /// Raw line 1, semicolon-delimited signal declarations
    pub signal_line: String,
    pub axis_kinds: Vec<String>,
    pub data_kinds: Vec<String>,
    pub data_info: Vec<String>,
    pub units: Vec<String>,
}

/// Split a header line on `;`, right-strip one group of trailing commas per
/// token, and deduplicate while preserving first-seen order.
///
/// Repeated per-column tags (e.g. the same axis label declared once per data
/// column) collapse to a single entry. Idempotent on already-collapsed input.
pub fn collapse_tags(line: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for token in line.split(';') {
        let token = token.trim_end_matches(',');
        if !seen.iter().any(|s| s == token) {
            seen.push(token.to_string());
        }
    }
    seen
}

/// Parse the ordered metadata-line sequence into [`HeaderFields`].
///
/// Requires at least six lines; validates the axis-kind and data-type-kind
/// declarations before any numeric work happens downstream.
pub fn parse_header(lines: &[String]) -> Result<HeaderFields> {
    if lines.len() < HEADER_LINE_COUNT {
        return Err(VcsvError::Format(format!(
            "truncated header: expected {} metadata lines, found {}",
            HEADER_LINE_COUNT,
            lines.len()
        )));
    }

    let version = lines[0]
        .starts_with("Version")
        .then(|| lines[0].split_whitespace().nth(1))
        .flatten()
        .map(str::to_string);

    let axis_kinds = collapse_tags(&lines[2]);
    let data_kinds = collapse_tags(&lines[3]);
    let data_info = collapse_tags(&lines[4]);
    let units = collapse_tags(&lines[5]);

    if axis_kinds != [AXIS_KIND_XY] {
        return Err(VcsvError::Format(format!(
            "axes not X/Y, unsupported: {:?}",
            axis_kinds
        )));
    }
    if data_kinds != [DATA_KIND_REAL] {
        return Err(VcsvError::Format(format!(
            "non-real data, unsupported: {:?}",
            data_kinds
        )));
    }

    debug!(
        version = version.as_deref().unwrap_or("<none>"),
        info = ?data_info,
        units = ?units,
        "Header parsed"
    );

    Ok(HeaderFields {
        version,
        signal_line: lines[1].clone(),
        axis_kinds,
        data_kinds,
        data_info,
        units,
    })
}
