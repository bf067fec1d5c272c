//! Line classification for VCSV text sources
//!
//! Splits a line-oriented source into metadata lines (marker-prefixed) and
//! comma-split data rows. Pure reclassification: nothing is validated here,
//! malformed lines surface as errors in the later pipeline stages.

use crate::types::{Result, METADATA_MARKER};
use std::io::BufRead;
use tracing::trace;

/// A data line split into raw tokens, tagged with its 1-based source line
#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    pub line_no: usize,
    pub tokens: Vec<String>,
}

/// Raw line classes of a VCSV source, in file order
///
/// Produced once by [`classify_lines`] and consumed immediately by the
/// parsing pipeline.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawRecord {
    /// Metadata lines with the leading marker stripped, remainder verbatim
    pub header_lines: Vec<String>,
    /// Non-empty data lines as comma-split token rows
    pub data_rows: Vec<DataRow>,
}

/// Classify every line of `source` in a single forward pass.
///
/// Each line is trimmed of surrounding whitespace; lines starting with `;`
/// are metadata, all other non-empty lines are data. Empty lines are
/// dropped.
pub fn classify_lines<R: BufRead>(source: R) -> Result<RawRecord> {
    let mut record = RawRecord::default();

    for (idx, line) in source.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(METADATA_MARKER) {
            record.header_lines.push(rest.to_string());
        } else if !trimmed.is_empty() {
            record.data_rows.push(DataRow {
                line_no: idx + 1,
                tokens: trimmed.split(',').map(str::to_string).collect(),
            });
        }
    }

    trace!(
        header_lines = record.header_lines.len(),
        data_rows = record.data_rows.len(),
        "Lines classified"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_splits_header_and_data() {
        let input = ";Version 1.0\n;SigA;SigB\n0,1\n\n 1,2 \n";
        let record = classify_lines(input.as_bytes()).unwrap();

        assert_eq!(record.header_lines, vec!["Version 1.0", "SigA;SigB"]);
        assert_eq!(record.data_rows.len(), 2);
        assert_eq!(record.data_rows[0].tokens, vec!["0", "1"]);
        assert_eq!(record.data_rows[0].line_no, 3);
        assert_eq!(record.data_rows[1].tokens, vec!["1", "2"]);
        assert_eq!(record.data_rows[1].line_no, 5);
    }

    #[test]
    fn test_marker_stripped_verbatim_remainder() {
        let record = classify_lines(";  padded header  ".as_bytes()).unwrap();
        // Only the outer whitespace of the raw line is trimmed
        assert_eq!(record.header_lines, vec!["  padded header"]);
    }

    #[test]
    fn test_empty_source() {
        let record = classify_lines("".as_bytes()).unwrap();
        assert!(record.header_lines.is_empty());
        assert!(record.data_rows.is_empty());
    }
}
