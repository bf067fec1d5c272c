//! Numeric grid construction and x-axis extraction
//!
//! Converts the raw data rows into a rectangular float matrix, splits the
//! interleaved (axis, value) column pairs, and derives the shared x-axis.
//! The axis-shape classification distinguishes a shared axis from per-signal
//! and per-column axes, but only the shared case is a supported path; the
//! others are reserved for future support and fail uniformly.

use crate::reader::DataRow;
use crate::types::{Result, VcsvError};
use tracing::debug;

/// Shape of the extracted axis columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisShape {
    /// One axis column shared by every signal instance
    Shared,
    /// One distinct axis column per signal
    PerSignal,
    /// Every data column pair carries its own axis
    PerColumn,
}

/// Rectangular numeric payload split into axis and values
#[derive(Debug, Clone, PartialEq)]
pub struct NumericGrid {
    /// Shared axis values, sorted ascending
    pub axis: Vec<f64>,
    /// One row per original (axis, value) column pair, one entry per data
    /// row, aligned with `axis` order
    pub values: Vec<Vec<f64>>,
}

/// Parse the data rows into a float matrix and derive the shared axis.
///
/// `nb_signals` is the resolved distinct-signal count; it only feeds the
/// axis-shape classification.
pub fn build_grid(rows: &[DataRow], nb_signals: usize) -> Result<NumericGrid> {
    if rows.is_empty() {
        return Err(VcsvError::Format("data section is empty".to_string()));
    }

    let width = rows[0].tokens.len();
    // Rectangularity check runs before any float conversion
    for row in rows {
        if row.tokens.len() != width {
            return Err(VcsvError::Parse(format!(
                "line {}: expected {} columns, found {}",
                row.line_no,
                width,
                row.tokens.len()
            )));
        }
    }
    if width % 2 != 0 {
        return Err(VcsvError::Format(format!(
            "odd data column count {}: expected alternating axis/value pairs",
            width
        )));
    }

    let matrix = parse_matrix(rows, width)?;
    let num_pairs = width / 2;

    // Unique axis columns, compared element-wise across all rows
    let axis_columns: Vec<Vec<f64>> = (0..num_pairs)
        .map(|pair| matrix.iter().map(|row| row[2 * pair]).collect())
        .collect();
    let mut unique_columns: Vec<&Vec<f64>> = Vec::new();
    for column in &axis_columns {
        if !unique_columns.iter().any(|c| *c == column) {
            unique_columns.push(column);
        }
    }

    let shape = classify_axis(unique_columns.len(), num_pairs, nb_signals)?;
    debug!(
        rows = matrix.len(),
        pairs = num_pairs,
        unique_axis_columns = unique_columns.len(),
        shape = ?shape,
        "Axis columns classified"
    );
    if shape != AxisShape::Shared {
        return Err(VcsvError::Format(format!(
            "multiple x-axis not supported ({:?})",
            shape
        )));
    }

    let (axis, order) = sort_axis(unique_columns[0])?;

    // Odd-indexed columns, transposed: one row per pair, reordered so each
    // entry lines up with its axis coordinate
    let values: Vec<Vec<f64>> = (0..num_pairs)
        .map(|pair| order.iter().map(|&j| matrix[j][2 * pair + 1]).collect())
        .collect();

    debug!(axis_points = axis.len(), "Numeric grid built");
    Ok(NumericGrid { axis, values })
}

/// Convert every token to `f64`, naming the offending line and column on
/// failure. Unparseable tokens never degrade to a default value.
fn parse_matrix(rows: &[DataRow], width: usize) -> Result<Vec<Vec<f64>>> {
    let mut matrix = Vec::with_capacity(rows.len());
    for row in rows {
        let mut parsed = Vec::with_capacity(width);
        for (col, token) in row.tokens.iter().enumerate() {
            let value = token.trim().parse::<f64>().map_err(|_| {
                VcsvError::Parse(format!(
                    "line {}, column {}: non-numeric data '{}'",
                    row.line_no,
                    col + 1,
                    token
                ))
            })?;
            parsed.push(value);
        }
        matrix.push(parsed);
    }
    Ok(matrix)
}

fn classify_axis(unique: usize, num_pairs: usize, nb_signals: usize) -> Result<AxisShape> {
    if unique == 1 {
        Ok(AxisShape::Shared)
    } else if unique == nb_signals {
        Ok(AxisShape::PerSignal)
    } else if unique != num_pairs {
        Err(VcsvError::Format(format!(
            "x-axis values inconsistent: {} distinct axis columns across {} pairs",
            unique, num_pairs
        )))
    } else {
        Ok(AxisShape::PerColumn)
    }
}

/// Sort the shared axis column ascending and return the row permutation that
/// realigns the value columns. A repeated axis value cannot index a
/// rectangular table.
fn sort_axis(column: &[f64]) -> Result<(Vec<f64>, Vec<usize>)> {
    let mut order: Vec<usize> = (0..column.len()).collect();
    order.sort_by(|&a, &b| column[a].total_cmp(&column[b]));

    let axis: Vec<f64> = order.iter().map(|&i| column[i]).collect();
    if let Some(pair) = axis.windows(2).find(|w| w[0] == w[1]) {
        return Err(VcsvError::Shape(format!(
            "duplicate x-axis value {}",
            pair[0]
        )));
    }
    Ok((axis, order))
}
