pub mod residual;

use std::fmt;

use itertools::Itertools;

use crate::error::TableauError;
use crate::real_matrix::pivot_ordering::{apply_ordering, find_pivot_ordering};
use crate::real_matrix::{EliminationParams, EquationRow, GaussJordan};

pub use residual::substitution_residual;

/// One equation in raw form: `(coefficients, results)`.
pub type RawEquation = (Vec<f64>, Vec<f64>);

/// A square augmented system `A · X = B` with `N` equations and `M`
/// right-hand-side columns.
///
/// The rows are put into a pivot-valid order when the tableau is built;
/// `solve` then reduces them in place.
#[derive(Debug, Clone)]
pub struct Tableau {
    rows: Vec<EquationRow>,
    params: EliminationParams,
}

impl Tableau {
    pub fn new(rows: Vec<EquationRow>) -> Result<Self, TableauError> {
        Self::with_params(rows, EliminationParams::default())
    }

    pub fn with_params(rows: Vec<EquationRow>, params: EliminationParams) -> Result<Self, TableauError> {
        validate_shape(&rows)?;
        let ordering = find_pivot_ordering(&rows)?;
        Ok(Self {
            rows: apply_ordering(rows, &ordering)?,
            params,
        })
    }

    /// Builds a tableau from nested arrays, one `(coefficients, results)`
    /// pair per equation.
    pub fn from_raw(equations: Vec<RawEquation>) -> Result<Self, TableauError> {
        Self::from_raw_with_params(equations, EliminationParams::default())
    }

    pub fn from_raw_with_params(
        equations: Vec<RawEquation>,
        params: EliminationParams,
    ) -> Result<Self, TableauError> {
        let rows = equations
            .into_iter()
            .map(|(coefficients, results)| EquationRow::from_values(coefficients, results))
            .collect_vec();
        Self::with_params(rows, params)
    }

    /// Reduces the coefficient side to the identity and returns the result
    /// vectors, one per row in the current row order.
    ///
    /// The reduction happens in place; the pre-elimination state is gone
    /// afterwards.
    pub fn solve(&mut self) -> Result<Vec<Vec<f64>>, TableauError> {
        GaussJordan::new(&mut self.rows, self.params).reduce_to_identity()?;
        log::debug!(
            "solved {} equations with {} right-hand side column(s)",
            self.dimension(),
            self.result_width()
        );
        Ok(self.results())
    }

    pub fn coefficients(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.coefficients().values().to_vec())
            .collect()
    }

    pub fn results(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.results().values().to_vec())
            .collect()
    }

    /// First column of the result side.
    pub fn first_results(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.results().values()[0])
            .collect()
    }

    pub fn rows(&self) -> &[EquationRow] {
        &self.rows
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn result_width(&self) -> usize {
        self.rows[0].result_width()
    }

    pub fn params(&self) -> EliminationParams {
        self.params
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.iter().join("\n"))
    }
}

fn validate_shape(rows: &[EquationRow]) -> Result<(), TableauError> {
    let height = rows.len();
    if height <= 1 {
        return Err(TableauError::invalid_dimensions(format!(
            "a tableau needs more than one row, got {height}"
        )));
    }
    for (index, row) in rows.iter().enumerate() {
        if row.coefficient_width() != height {
            return Err(TableauError::invalid_dimensions(format!(
                "row {index} has {} coefficients but there are {height} rows",
                row.coefficient_width()
            )));
        }
    }
    let result_width = rows[0].result_width();
    if result_width == 0 {
        return Err(TableauError::invalid_dimensions(
            "rows need at least one result column",
        ));
    }
    if let Some((index, row)) = rows
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

#[cfg(test)]
mod test {
    use super::*;

    fn assert_close(got: &[Vec<f64>], want: &[Vec<f64>]) {
        assert_eq!(got.len(), want.len());
        for (got_row, want_row) in got.iter().zip(want.iter()) {
            assert_eq!(got_row.len(), want_row.len());
            for (g, w) in got_row.iter().zip(want_row.iter()) {
                assert!((g - w).abs() < 1e-9, "{got:?} != {want:?}");
            }
        }
    }

    #[test]
    fn solves_the_two_by_two_example() {
        let mut tableau = Tableau::from_raw(vec![
            (vec![2.0, 1.0], vec![5.0]),
            (vec![1.0, 3.0], vec![10.0]),
        ])
        .unwrap();
        let solution = tableau.solve().unwrap();
        assert_close(&solution, &[vec![1.0], vec![3.0]]);
    }

    #[test]
    fn reorders_a_zero_leading_pivot() {
        let mut tableau = Tableau::from_raw(vec![
            (vec![0.0, 1.0], vec![1.0]),
            (vec![1.0, 0.0], vec![2.0]),
        ])
        .unwrap();
        assert_eq!(tableau.coefficients(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(tableau.solve().unwrap(), vec![vec![2.0], vec![1.0]]);
    }

    #[test]
    fn identity_system_returns_results_unchanged() {
        let results = vec![vec![4.0, -1.0], vec![0.5, 2.0], vec![-3.0, 7.0]];
        let mut tableau = Tableau::from_raw(vec![
            (vec![1.0, 0.0, 0.0], results[0].clone()),
            (vec![0.0, 1.0, 0.0], results[1].clone()),
            (vec![0.0, 0.0, 1.0], results[2].clone()),
        ])
        .unwrap();
        assert_eq!(tableau.results(), results);
        assert_eq!(tableau.solve().unwrap(), results);
    }

    #[test]
    fn solution_satisfies_the_original_equations() {
        let equations = vec![
            (vec![3.0, 0.0, 2.0, -1.0], vec![1.0, 0.0]),
            (vec![0.0, 0.0, 1.0, 4.0], vec![2.0, 1.0]),
            (vec![1.0, 5.0, 0.0, 0.0], vec![-3.0, 2.0]),
            (vec![0.0, 2.0, 0.0, 1.0], vec![0.5, 3.0]),
        ];
        let mut tableau = Tableau::from_raw(equations.clone()).unwrap();
        let solution = tableau.solve().unwrap();
        assert!(substitution_residual(&equations, &solution).unwrap() < 1e-9);
    }

    #[test]
    fn zero_row_has_no_pivot_ordering() {
        let err = Tableau::from_raw(vec![
            (vec![1.0, 2.0], vec![1.0]),
            (vec![0.0, 0.0], vec![1.0]),
        ])
        .unwrap_err();
        assert_eq!(err, TableauError::NoValidPivotOrdering { rows: 2 });
    }

    #[test]
    fn zero_column_has_no_pivot_ordering() {
        let err = Tableau::from_raw(vec![
            (vec![1.0, 0.0], vec![1.0]),
            (vec![2.0, 0.0], vec![1.0]),
        ])
        .unwrap_err();
        assert_eq!(err, TableauError::NoValidPivotOrdering { rows: 2 });
    }

    #[test]
    fn single_row_is_invalid() {
        let err = Tableau::from_raw(vec![(vec![1.0], vec![1.0])]).unwrap_err();
        assert!(matches!(err, TableauError::InvalidDimensions { .. }));
    }

    #[test]
    fn non_square_is_invalid() {
        let err = Tableau::from_raw(vec![
            (vec![1.0, 0.0, 0.0], vec![1.0]),
            (vec![0.0, 1.0, 0.0], vec![1.0]),
        ])
        .unwrap_err();
        assert!(matches!(err, TableauError::InvalidDimensions { .. }));
    }

    #[test]
    fn ragged_results_are_invalid() {
        let err = Tableau::from_raw(vec![
            (vec![1.0, 0.0], vec![1.0]),
            (vec![0.0, 1.0], vec![1.0, 2.0]),
        ])
        .unwrap_err();
        assert!(matches!(err, TableauError::InvalidDimensions { .. }));
    }

    #[test]
    fn empty_results_are_invalid() {
        let err = Tableau::from_raw(vec![
            (vec![1.0, 0.0], vec![]),
            (vec![0.0, 1.0], vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, TableauError::InvalidDimensions { .. }));
    }

    #[test]
    fn cancelled_pivot_fails_at_solve_time() {
        let mut tableau = Tableau::from_raw(vec![
            (vec![1.0, 1.0], vec![1.0]),
            (vec![1.0, 1.0], vec![2.0]),
        ])
        .unwrap();
        assert_eq!(
            tableau.solve().unwrap_err(),
            TableauError::SingularSystem { row: 1 }
        );
    }

    #[test]
    fn coefficient_and_result_accessors_differ() {
        let mut tableau = Tableau::from_raw(vec![
            (vec![2.0, 1.0], vec![5.0, 7.0]),
            (vec![1.0, 3.0], vec![10.0, 11.0]),
        ])
        .unwrap();
        tableau.solve().unwrap();
        assert_close(&tableau.coefficients(), &[vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert_close(&tableau.results(), &[vec![1.0, 2.0], vec![3.0, 3.0]]);
        assert_ne!(tableau.coefficients(), tableau.results());
        let firsts = tableau.first_results();
        assert!((firsts[0] - 1.0).abs() < 1e-9);
        assert!((firsts[1] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn accepts_prebuilt_rows() {
        use crate::real_matrix::RowSide;

        let rows = vec![
            EquationRow::new(RowSide::new(vec![0.0, 2.0]), RowSide::new(vec![4.0])),
            EquationRow::new(RowSide::new(vec![3.0, 0.0]), RowSide::new(vec![9.0])),
        ];
        let mut tableau = Tableau::new(rows).unwrap();
        assert_eq!(tableau.first_results(), vec![9.0, 4.0]);
        assert_eq!(tableau.solve().unwrap(), vec![vec![3.0], vec![2.0]]);
    }

    #[test]
    fn reports_its_shape() {
        let tableau = Tableau::from_raw(vec![
            (vec![1.0, 2.0, 0.0], vec![1.0, 0.0]),
            (vec![0.0, 1.0, 2.0], vec![0.0, 1.0]),
            (vec![2.0, 0.0, 1.0], vec![1.0, 1.0]),
        ])
        .unwrap();
        assert_eq!(tableau.dimension(), 3);
        assert_eq!(tableau.result_width(), 2);
        assert_eq!(tableau.rows().len(), 3);
        assert_eq!(tableau.params(), EliminationParams::default());
    }

    #[test]
    fn displays_one_row_per_line() {
        let tableau = Tableau::from_raw(vec![
            (vec![2.0, 1.0], vec![5.0]),
            (vec![1.0, 3.0], vec![10.0]),
        ])
        .unwrap();
        assert_eq!(tableau.to_string(), "[2, 1] | [5]\n[1, 3] | [10]");
    }
}
