use std::time::Instant;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::random_system::generate_random_system;
use super::run_params::{RunParams, SystemSource, MAX_SEARCH_DIMENSION};
use crate::debug_tableau::debug_tableau;
use crate::tableau::{substitution_residual, RawEquation, Tableau};

#[derive(Debug, Clone)]
pub struct RunReport {
    pub equations: Vec<RawEquation>,
    pub solution: Vec<Vec<f64>>,
    pub residual: f64,
    /// Largest deviation from the generating solution, for random systems.
    pub known_solution_error: Option<f64>,
}

pub struct TableauRunBuilder {
    params: RunParams,
}

impl TableauRunBuilder {
    pub fn new(params: RunParams) -> Self {
        Self { params }
    }

    pub fn run(self) -> Result<RunReport> {
        self.params.validate().context("validating run parameters")?;
        let dimension = self.params.dimension();
        if dimension > MAX_SEARCH_DIMENSION {
            bail!(
                "refusing to search pivot orderings for {} equations (at most {} supported)",
                dimension,
                MAX_SEARCH_DIMENSION
            );
        }
        let (equations, known_solution) = match &self.params.source {
            SystemSource::Equations(equations) => (equations.clone(), None),
            SystemSource::Random {
                dimension,
                rhs_columns,
                seed,
            } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                let system = generate_random_system(*dimension, *rhs_columns, &mut rng);
                (system.equations, Some(system.solution))
            }
        };
        log::debug!("solving {} equations", equations.len());

        let start = Instant::now();
        let mut tableau =
            Tableau::from_raw_with_params(equations.clone(), self.params.elimination_params())
                .context("building tableau")?;
        if self.params.dump {
            debug_tableau(&tableau);
        }
        let solution = tableau.solve().context("solving tableau")?;
        if self.params.dump {
            debug_tableau(&tableau);
        }
        log::debug!("time to solve: {:#?}", start.elapsed());

        let residual =
            substitution_residual(&equations, &solution).context("substituting solution")?;
        let known_solution_error = known_solution.map(|known| {
            known
                .iter()
                .flatten()
                .zip(solution.iter().flatten())
                .map(|(want, got)| (want - got).abs())
                .fold(0.0, f64::max)
        });
        Ok(RunReport {
            equations,
            solution,
            residual,
            known_solution_error,
        })
    }
}
