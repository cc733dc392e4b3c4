use std::fmt;

use bitvec::prelude::*;

use super::row_side::RowSide;
use crate::error::TableauError;

/// One equation of an augmented matrix: `coefficients · x = results`.
///
/// Both sides always receive the same operation with the same scalar, so the
/// row keeps describing the same equation up to a linear combination.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationRow {
    coefficients: RowSide,
    results: RowSide,
}

impl EquationRow {
    pub fn new(coefficients: RowSide, results: RowSide) -> Self {
        Self {
            coefficients,
            results,
        }
    }

    pub fn from_values(coefficients: Vec<f64>, results: Vec<f64>) -> Self {
        Self::new(RowSide::new(coefficients), RowSide::new(results))
    }

    pub fn coefficients(&self) -> &RowSide {
        &self.coefficients
    }

    pub fn results(&self) -> &RowSide {
        &self.results
    }

    pub fn coefficient_width(&self) -> usize {
        self.coefficients.width()
    }

    pub fn result_width(&self) -> usize {
        self.results.width()
    }

    pub(crate) fn coefficient(&self, column: usize) -> f64 {
        self.coefficients.values()[column]
    }

    pub fn subtract_multiple(&mut self, other: &EquationRow, multiple: f64) -> Result<(), TableauError> {
        // check both sides first so a failure leaves the row untouched
        self.coefficients.ensure_same_width(&other.coefficients)?;
        self.results.ensure_same_width(&other.results)?;
        self.coefficients.subtract_multiple(&other.coefficients, multiple)?;
        self.results.subtract_multiple(&other.results, multiple)
    }

    pub fn divide_by(&mut self, divisor: f64) {
        self.coefficients.divide_by(divisor);
        self.results.divide_by(divisor);
    }

    /// Mask of the coefficient columns holding a nonzero value.
    pub fn nonzero_columns(&self) -> BitVec {
        self.coefficients
            .values()
            .iter()
            .map(|value| *value != 0.0)
            .collect()
    }
}

impl fmt::Display for EquationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.coefficients, self.results)
    }
}
