use std::fmt;

use itertools::Itertools;

use crate::error::TableauError;

/// One side of an equation: a run of reals whose width is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSide {
    values: Vec<f64>,
}

impl RowSide {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn zeroes(width: usize) -> Self {
        Self {
            values: vec![0.0; width],
        }
    }

    pub fn width(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn ensure_same_width(&self, other: &RowSide) -> Result<(), TableauError> {
        if self.width() != other.width() {
            return Err(TableauError::invalid_dimensions(format!(
                "cannot combine vectors of width {} and {}",
                self.width(),
                other.width()
            )));
        }
        Ok(())
    }

    /// `self[k] -= other[k] * multiple` for every k.
    pub fn subtract_multiple(&mut self, other: &RowSide, multiple: f64) -> Result<(), TableauError> {
        self.ensure_same_width(other)?;
        for (value, subtrahend) in self.values.iter_mut().zip(other.values.iter()) {
            *value -= subtrahend * multiple;
        }
        Ok(())
    }

    /// Divides every value by `divisor`. Callers are expected to have checked
    /// the divisor against zero.
    pub fn divide_by(&mut self, divisor: f64) {
        for value in self.values.iter_mut() {
            *value /= divisor;
        }
    }
}

impl fmt::Display for RowSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.values.iter().join(", "))
    }
}
