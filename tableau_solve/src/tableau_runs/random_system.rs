use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::tableau::RawEquation;

const OFF_DIAGONAL_ZERO_PROBABILITY: f64 = 0.3;

/// A generated system together with the solution it was built from.
#[derive(Debug, Clone)]
pub struct RandomSystem {
    pub equations: Vec<RawEquation>,
    pub solution: Vec<Vec<f64>>,
}

/// Builds a strictly diagonally dominant system with a known solution, then
/// shuffles its equations so the diagonal is usually not in place.
pub fn generate_random_system<R: Rng + ?Sized>(
    dimension: usize,
    rhs_columns: usize,
    rng: &mut R,
) -> RandomSystem {
    let mut coefficients: Vec<Vec<f64>> = (0..dimension)
        .map(|_| {
            (0..dimension)
                .map(|_| {
                    if rng.gen_bool(OFF_DIAGONAL_ZERO_PROBABILITY) {
                        0.0
                    } else {
                        rng.gen_range(-10.0..10.0)
                    }
                })
                .collect_vec()
        })
        .collect_vec();
    for (i, row) in coefficients.iter_mut().enumerate() {
        let off_diagonal: f64 = row
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, value)| value.abs())
            .sum();
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        row[i] = sign * (off_diagonal + rng.gen_range(1.0..5.0));
    }
    let solution: Vec<Vec<f64>> = (0..dimension)
        .map(|_| {
            (0..rhs_columns)
                .map(|_| rng.gen_range(-5.0..5.0))
                .collect_vec()
        })
        .collect_vec();
    let mut equations = coefficients
        .into_iter()
        .map(|row| {
            let results = (0..rhs_columns)
                .map(|column| {
                    row.iter()
                        .zip(solution.iter())
                        .map(|(coefficient, variable)| coefficient * variable[column])
                        .sum::<f64>()
                })
                .collect_vec();
            (row, results)
        })
        .collect_vec();
    equations.shuffle(rng);
    RandomSystem {
        equations,
        solution,
    }
}
