//! Integration tests for vcsv-core
//!
//! End-to-end coverage over real VCSV text:
//! - parse: both table shapes, metadata record, axis handling
//! - errors: one test per taxonomy entry, asserting the error kind
//! - read: file-based entry point

use approx::assert_relative_eq;
use std::io::Write;
use vcsv_core::{parse_str, read, SweepTable, VcsvError};

// =============================================================================
// Test helpers
// =============================================================================

/// Join header groups and data rows into a VCSV document
fn vcsv(signal_line: &str, data: &[&str]) -> String {
    let mut doc = format!(
        ";Version 1.0\n;{}\n;X, Y\n;Re, Re\n;info\n;V\n",
        signal_line
    );
    for row in data {
        doc.push_str(row);
        doc.push('\n');
    }
    doc
}

// =============================================================================
// Test: Parameterized mode
// =============================================================================

#[test]
fn test_param_mode_worked_example() {
    let doc = vcsv("Sig (p=1);Sig (p=2)", &["0,1,0,2", "1,3,1,4"]);
    let result = parse_str(&doc).unwrap();

    assert_eq!(result.metadata.version.as_deref(), Some("1.0"));
    assert_eq!(result.metadata.signals.len(), 2);
    assert_eq!(result.metadata.units, vec!["V"]);

    let table = result.table.as_param().expect("expected parameterized table");
    assert_eq!(table.param_names(), &["p".to_string()]);
    assert_eq!(table.index, vec![vec![1.0], vec![2.0]]);
    assert_eq!(table.axis, vec![0.0, 1.0]);
    assert_eq!(table.row(&[1.0]), Some(&[1.0, 3.0][..]));
    assert_eq!(table.row(&[2.0]), Some(&[2.0, 4.0][..]));
}

#[test]
fn test_param_mode_row_per_combination() {
    let doc = vcsv(
        "Out (temp=25|vdd=1.1);Out (temp=25|vdd=1.2);Out (temp=85|vdd=1.1)",
        &["0,0.1,0,0.2,0,0.3", "1,1.1,1,1.2,1,1.3"],
    );
    let result = parse_str(&doc).unwrap();

    // One row per signal instance, one column per unique axis value
    assert_eq!(result.table.num_rows(), 3);
    assert_eq!(result.table.num_cols(), 2);

    let table = result.table.as_param().unwrap();
    assert_eq!(table.param_names(), &["temp".to_string(), "vdd".to_string()]);
    let row = table.row(&[85.0, 1.1]).unwrap();
    assert_relative_eq!(row[0], 0.3);
    assert_relative_eq!(row[1], 1.3);
}

#[test]
fn test_param_values_parsed_in_schema_order() {
    let doc = vcsv("S (a=3|b=4)", &["0,1", "1,2"]);
    let result = parse_str(&doc).unwrap();
    let table = result.table.as_param().unwrap();
    assert_eq!(table.index, vec![vec![3.0, 4.0]]);
}

// =============================================================================
// Test: Bare mode
// =============================================================================

#[test]
fn test_bare_mode_two_signals() {
    let doc = vcsv("SigA;SigB", &["0,1,0,2", "1,3,1,4"]);
    let result = parse_str(&doc).unwrap();

    let flat = result.table.as_flat().expect("expected flat table");
    assert_eq!(flat.signal_names, vec!["SigA", "SigB"]);
    // Axis-major: one row per axis value
    assert_eq!(result.table.num_rows(), 2);
    assert_eq!(result.table.num_cols(), 2);
    assert_eq!(flat.signal("SigA"), Some(vec![1.0, 3.0]));
    assert_eq!(flat.signal("SigB"), Some(vec![2.0, 4.0]));
}

#[test]
fn test_bare_mode_duplicate_names_collapse_to_unique_columns() {
    // Three column pairs but only two unique signal names: shape mismatch
    let doc = vcsv("SigA;SigB;SigA", &["0,1,0,2,0,3"]);
    let err = parse_str(&doc).unwrap_err();
    assert!(matches!(err, VcsvError::Shape(_)));
}

#[test]
fn test_bare_mode_is_transposed_relative_to_param_mode() {
    let bare = parse_str(&vcsv("S", &["0,1", "1,2"])).unwrap();
    let param = parse_str(&vcsv("S (p=0)", &["0,1", "1,2"])).unwrap();

    match (&bare.table, &param.table) {
        (SweepTable::Flat(f), SweepTable::Param(p)) => {
            assert_eq!(f.values, vec![vec![1.0], vec![2.0]]);
            assert_eq!(p.values, vec![vec![1.0, 2.0]]);
        }
        other => panic!("unexpected table shapes: {:?}", other),
    }
}

// =============================================================================
// Test: Metadata record
// =============================================================================

#[test]
fn test_version_optional() {
    let doc = vcsv("S", &["0,1"]).replace(";Version 1.0", ";free text header");
    let result = parse_str(&doc).unwrap();
    assert_eq!(result.metadata.version, None);
}

#[test]
fn test_repeated_header_tags_collapse() {
    let doc = ";Version 1.0\n;S1;S2\n;X, Y,;X, Y\n;Re, Re,;Re, Re\n;i1,;i2\n;V,;V\n0,1,0,2\n";
    let result = parse_str(doc).unwrap();
    assert_eq!(result.metadata.axis_kinds, vec!["X, Y"]);
    assert_eq!(result.metadata.data_kinds, vec!["Re, Re"]);
    assert_eq!(result.metadata.data_info, vec!["i1", "i2"]);
    assert_eq!(result.metadata.units, vec!["V"]);
}

#[test]
fn test_metadata_lines_beyond_header_unconsumed() {
    let mut doc = vcsv("S", &[]);
    doc.push_str(";some trailing annotation\n0,1\n");
    let result = parse_str(&doc).unwrap();
    assert_eq!(result.table.axis(), &[0.0]);
}

// =============================================================================
// Test: Error taxonomy
// =============================================================================

#[test]
fn test_truncated_header_is_format_error() {
    let err = parse_str(";only\n;five\n;X, Y\n;Re, Re\n;lines\n0,1\n").unwrap_err();
    assert!(matches!(err, VcsvError::Format(_)));
}

#[test]
fn test_bad_axis_kind_fails_before_numeric_parsing() {
    // The data section is garbage; the axis check must fire first
    let doc = ";v\n;S\n;X\n;Re, Re\n;i\n;V\nnot,numbers\n";
    let err = parse_str(doc).unwrap_err();
    match err {
        VcsvError::Format(msg) => assert!(msg.contains("axes")),
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn test_bad_data_kind_is_format_error() {
    let doc = ";v\n;S\n;X, Y\n;Complex\n;i\n;V\n0,1\n";
    let err = parse_str(doc).unwrap_err();
    match err {
        VcsvError::Format(msg) => assert!(msg.contains("non-real")),
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn test_param_schema_mismatch_ignores_data_section() {
    // Data section is well-formed; the schema gate still fires first
    let doc = vcsv("Sig (temp=1|vdd=2);Sig (temp=3)", &["0,1,0,2"]);
    let err = parse_str(&doc).unwrap_err();
    assert!(matches!(err, VcsvError::Schema(_)));
}

#[test]
fn test_multiple_parameterized_signals_rejected() {
    let doc = vcsv("SigA (p=1);SigB (p=1)", &["0,1,0,2"]);
    let err = parse_str(&doc).unwrap_err();
    assert!(matches!(err, VcsvError::Schema(_)));
}

#[test]
fn test_odd_column_count_is_format_error_not_silent_drop() {
    let doc = vcsv("S", &["0,1,2"]);
    let err = parse_str(&doc).unwrap_err();
    match err {
        VcsvError::Format(msg) => assert!(msg.contains("odd")),
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_token_is_parse_error_with_location() {
    let doc = vcsv("S", &["0,1", "1,oops"]);
    let err = parse_str(&doc).unwrap_err();
    match err {
        VcsvError::Parse(msg) => {
            assert!(msg.contains("oops"));
            assert!(msg.contains("line 8"), "location missing from: {}", msg);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_ragged_rows_are_parse_error() {
    let doc = vcsv("S", &["0,1", "1"]);
    let err = parse_str(&doc).unwrap_err();
    assert!(matches!(err, VcsvError::Parse(_)));
}

#[test]
fn test_malformed_parameter_assignment_is_parse_error() {
    let doc = vcsv("Sig (p1|q=2)", &["0,1"]);
    let err = parse_str(&doc).unwrap_err();
    assert!(matches!(err, VcsvError::Parse(_)));
}

#[test]
fn test_per_signal_axes_rejected() {
    let doc = vcsv("SigA;SigB", &["0,1,5,2", "1,3,6,4"]);
    let err = parse_str(&doc).unwrap_err();
    match err {
        VcsvError::Format(msg) => assert!(msg.contains("multiple x-axis")),
        other => panic!("expected format error, got {:?}", other),
    }
}

#[test]
fn test_empty_data_section_is_format_error() {
    let doc = vcsv("S", &[]);
    let err = parse_str(&doc).unwrap_err();
    assert!(matches!(err, VcsvError::Format(_)));
}

// =============================================================================
// Test: Axis handling
// =============================================================================

#[test]
fn test_axis_sorted_with_values_realigned() {
    let doc = vcsv("S", &["2,30", "0,10", "1,20"]);
    let result = parse_str(&doc).unwrap();
    let flat = result.table.as_flat().unwrap();
    assert_eq!(flat.axis, vec![0.0, 1.0, 2.0]);
    assert_eq!(flat.signal("S"), Some(vec![10.0, 20.0, 30.0]));
}

#[test]
fn test_duplicate_axis_values_rejected() {
    let doc = vcsv("S", &["0,1", "0,2"]);
    let err = parse_str(&doc).unwrap_err();
    assert!(matches!(err, VcsvError::Shape(_)));
}

#[test]
fn test_engineering_notation_axis() {
    let doc = vcsv("S", &["1e-9,0.5", "1e-6,0.25"]);
    let result = parse_str(&doc).unwrap();
    let axis = result.table.axis();
    assert_relative_eq!(axis[0], 1e-9);
    assert_relative_eq!(axis[1], 1e-6);
}

// =============================================================================
// Test: File-based reading
// =============================================================================

#[test]
fn test_read_matches_parse_str() {
    let doc = vcsv("Sig (p=1);Sig (p=2)", &["0,1,0,2", "1,3,1,4"]);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(doc.as_bytes()).unwrap();

    let from_file = read(file.path()).unwrap();
    let from_str = parse_str(&doc).unwrap();
    assert_eq!(from_file, from_str);
}

#[test]
fn test_read_nonexistent_file() {
    let err = read("/nonexistent/path/sweep.vcsv").unwrap_err();
    assert!(matches!(err, VcsvError::Io(_)));
}
