use super::equation_row::EquationRow;
use crate::error::TableauError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliminationParams {
    /// Pivots whose magnitude does not exceed this are treated as zero.
    pub zero_tolerance: f64,
}

impl Default for EliminationParams {
    fn default() -> Self {
        Self {
            zero_tolerance: 0.0,
        }
    }
}

/// Reduces an augmented system, whose rows are already in a pivot-valid
/// order, until the coefficient side is the identity.
pub struct GaussJordan<'rows> {
    rows: &'rows mut [EquationRow],
    params: EliminationParams,
}

impl<'rows> GaussJordan<'rows> {
    pub fn new(rows: &'rows mut [EquationRow], params: EliminationParams) -> Self {
        Self { rows, params }
    }

    pub fn reduce_to_identity(&mut self) -> Result<(), TableauError> {
        self.ensure_shape()?;
        self.forward_eliminate()?;
        self.ensure_nonzero_diagonal()?;
        self.backward_eliminate()
    }

    // runs before the first write so a rejected system is left untouched
    fn ensure_shape(&self) -> Result<(), TableauError> {
        let height = self.rows.len();
        if let Some((index, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.coefficient_width() != height)
        {
            return Err(TableauError::invalid_dimensions(format!(
                "row {index} has {} coefficients but the system has {height} rows",
                row.coefficient_width()
            )));
        }
        let Some(result_width) = self.rows.first().map(EquationRow::result_width) else {
            return Ok(());
        };
        if let Some((index, row)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.result_width() != result_width)
        {
            return Err(TableauError::invalid_dimensions(format!(
                "row {index} has {} results but row 0 has {result_width}",
                row.result_width()
            )));
        }
        Ok(())
    }

    fn forward_eliminate(&mut self) -> Result<(), TableauError> {
        for active in 0..self.rows.len() {
            let pivot = self.rows[active].coefficient(active);
            if self.is_zero(pivot) {
                // dividing would turn the diagonal into NaN and hide the
                // degeneracy from the diagonal check
                log::debug!("pivot of row {active} vanished during forward elimination");
                continue;
            }
            self.rows[active].divide_by(pivot);
            self.eliminate_below(active)?;
            log::trace!("forward step {active}: {:?}", self.rows);
        }
        Ok(())
    }

    fn eliminate_below(&mut self, active: usize) -> Result<(), TableauError> {
        let (head, tail) = self.rows.split_at_mut(active + 1);
        let pivot_row = &head[active];
        for row in tail.iter_mut() {
            let multiple = row.coefficient(active);
            row.subtract_multiple(pivot_row, multiple)?;
        }
        Ok(())
    }

    fn ensure_nonzero_diagonal(&self) -> Result<(), TableauError> {
        match (0..self.rows.len()).find(|i| self.is_zero(self.rows[*i].coefficient(*i))) {
            Some(row) => {
                log::debug!("singular system: zero pivot at row {row}");
                Err(TableauError::SingularSystem { row })
            }
            None => Ok(()),
        }
    }

    fn backward_eliminate(&mut self) -> Result<(), TableauError> {
        for active in (0..self.rows.len()).rev() {
            self.eliminate_above(active)?;
            log::trace!("backward step {active}: {:?}", self.rows);
        }
        Ok(())
    }

    fn eliminate_above(&mut self, active: usize) -> Result<(), TableauError> {
        let (head, tail) = self.rows.split_at_mut(active);
        let pivot_row = &tail[0];
        for row in head.iter_mut() {
            let multiple = row.coefficient(active);
            row.subtract_multiple(pivot_row, multiple)?;
        }
        Ok(())
    }

    fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.params.zero_tolerance
    }
}
