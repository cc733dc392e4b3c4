use crate::error::TableauError;

use super::RawEquation;

/// Largest absolute difference between `A · X` and `B` when `solution` (one
/// row per variable, one column per right-hand side) is substituted back into
/// `equations`.
pub fn substitution_residual(equations: &[RawEquation], solution: &[Vec<f64>]) -> Result<f64, TableauError> {
    let mut worst: f64 = 0.0;
    for (index, (coefficients, results)) in equations.iter().enumerate() {
        if coefficients.len() != solution.len() {
            return Err(TableauError::invalid_dimensions(format!(
                "equation {index} has {} coefficients but the solution has {} variables",
                coefficients.len(),
                solution.len()
            )));
        }
        for (column, expected) in results.iter().enumerate() {
            let mut substituted = 0.0;
            for (coefficient, variable) in coefficients.iter().zip(solution.iter()) {
                let value = variable.get(column).ok_or_else(|| {
                    TableauError::invalid_dimensions(format!(
                        "solution has no column {column} for equation {index}"
                    ))
                })?;
                substituted += coefficient * value;
            }
            worst = worst.max((substituted - expected).abs());
        }
    }
    Ok(worst)
}
