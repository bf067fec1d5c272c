//! Table assembly from the resolved schema and numeric grid
//!
//! Two result shapes: a flat axis-major table (bare signal names) and a
//! signal-major table indexed by parameter-value tuples (parameter sweep of
//! one signal). The two shapes are transposed relative to each other.

use crate::grid::NumericGrid;
use crate::schema::{ResolvedSignals, SignalSchema};
use crate::types::{Result, VcsvError};
use tracing::debug;

/// Axis-major table: one row per axis value, one column per signal name
#[derive(Debug, Clone, PartialEq)]
pub struct FlatTable {
    /// Shared x-axis, one entry per row
    pub axis: Vec<f64>,
    /// Column labels, first-seen order
    pub signal_names: Vec<String>,
    /// Row-major cells: `values[row][col]` is signal `col` at axis point `row`
    pub values: Vec<Vec<f64>>,
}

impl FlatTable {
    /// Full sweep of one signal, by column name
    pub fn signal(&self, name: &str) -> Option<Vec<f64>> {
        let col = self.signal_names.iter().position(|n| n == name)?;
        Some(self.values.iter().map(|row| row[col]).collect())
    }
}

/// Signal-major table: one row per parameter combination, one column per
/// axis value
#[derive(Debug, Clone, PartialEq)]
pub struct ParamTable {
    /// Level names of the row index, in schema order
    pub param_names: Vec<String>,
    /// One parameter-value tuple per row, in declared order
    pub index: Vec<Vec<f64>>,
    /// Shared x-axis, one entry per column
    pub axis: Vec<f64>,
    /// Row-major cells: `values[row][col]` is the swept signal at axis point
    /// `col` for parameter tuple `row`
    pub values: Vec<Vec<f64>>,
}

impl ParamTable {
    /// Ordered parameter-name schema of the row index
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Full axis sweep for an exact parameter-value tuple
    pub fn row(&self, params: &[f64]) -> Option<&[f64]> {
        let row = self.index.iter().position(|tuple| tuple == params)?;
        Some(&self.values[row])
    }
}

/// Final parse output: flat or parameter-indexed
#[derive(Debug, Clone, PartialEq)]
pub enum SweepTable {
    Flat(FlatTable),
    Param(ParamTable),
}

impl SweepTable {
    /// Shared x-axis values
    pub fn axis(&self) -> &[f64] {
        match self {
            SweepTable::Flat(t) => &t.axis,
            SweepTable::Param(t) => &t.axis,
        }
    }

    pub fn num_rows(&self) -> usize {
        match self {
            SweepTable::Flat(t) => t.axis.len(),
            SweepTable::Param(t) => t.index.len(),
        }
    }

    pub fn num_cols(&self) -> usize {
        match self {
            SweepTable::Flat(t) => t.signal_names.len(),
            SweepTable::Param(t) => t.axis.len(),
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, SweepTable::Param(_))
    }

    pub fn as_flat(&self) -> Option<&FlatTable> {
        match self {
            SweepTable::Flat(t) => Some(t),
            SweepTable::Param(_) => None,
        }
    }

    pub fn as_param(&self) -> Option<&ParamTable> {
        match self {
            SweepTable::Param(t) => Some(t),
            SweepTable::Flat(_) => None,
        }
    }
}

/// Combine the resolved schema with the numeric grid.
pub fn assemble(resolved: &ResolvedSignals, grid: NumericGrid) -> Result<SweepTable> {
    match &resolved.schema {
        SignalSchema::Parameterized { name, param_names } => {
            assemble_param(resolved, name, param_names, grid)
        }
        SignalSchema::Bare { names } => assemble_flat(names, grid),
    }
}

fn assemble_param(
    resolved: &ResolvedSignals,
    name: &str,
    param_names: &[String],
    grid: NumericGrid,
) -> Result<SweepTable> {
    if resolved.declarations.len() != grid.values.len() {
        return Err(VcsvError::Shape(format!(
            "{} declared instances of '{}' but {} data column pairs",
            resolved.declarations.len(),
            name,
            grid.values.len()
        )));
    }

    let mut index = Vec::with_capacity(resolved.declarations.len());
    for decl in &resolved.declarations {
        let mut tuple = Vec::with_capacity(decl.parameters.len());
        for (param, value) in &decl.parameters {
            let value = value.trim().parse::<f64>().map_err(|_| {
                VcsvError::Parse(format!(
                    "signal '{}': non-numeric value '{}' for parameter '{}'",
                    decl.name, value, param
                ))
            })?;
            tuple.push(value);
        }
        index.push(tuple);
    }

    debug!(
        rows = index.len(),
        axis_points = grid.axis.len(),
        "Assembled parameterized table"
    );
    Ok(SweepTable::Param(ParamTable {
        param_names: param_names.to_vec(),
        index,
        axis: grid.axis,
        values: grid.values,
    }))
}

fn assemble_flat(names: &[String], grid: NumericGrid) -> Result<SweepTable> {
    if names.len() != grid.values.len() {
        return Err(VcsvError::Shape(format!(
            "{} signal names but {} data column pairs",
            names.len(),
            grid.values.len()
        )));
    }

    // Transpose to axis-major rows
    let values: Vec<Vec<f64>> = (0..grid.axis.len())
        .map(|j| grid.values.iter().map(|signal| signal[j]).collect())
        .collect();

    debug!(
        rows = grid.axis.len(),
        cols = names.len(),
        "Assembled flat table"
    );
    Ok(SweepTable::Flat(FlatTable {
        axis: grid.axis,
        signal_names: names.to_vec(),
        values,
    }))
}
