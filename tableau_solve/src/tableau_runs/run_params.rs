use anyhow::{ensure, Result};

use crate::real_matrix::EliminationParams;
use crate::tableau::RawEquation;

/// The pivot search walks up to N! orderings, so runs stay below this.
pub const MAX_SEARCH_DIMENSION: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum SystemSource {
    Equations(Vec<RawEquation>),
    Random {
        dimension: usize,
        rhs_columns: usize,
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunParams {
    pub source: SystemSource,
    pub zero_tolerance: f64,
    pub dump: bool,
}

impl RunParams {
    pub fn new(source: SystemSource) -> Self {
        Self {
            source,
            zero_tolerance: EliminationParams::default().zero_tolerance,
            dump: false,
        }
    }

    pub fn dimension(&self) -> usize {
        match &self.source {
            SystemSource::Equations(equations) => equations.len(),
            SystemSource::Random { dimension, .. } => *dimension,
        }
    }

    pub fn elimination_params(&self) -> EliminationParams {
        EliminationParams {
            zero_tolerance: self.zero_tolerance,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.zero_tolerance.is_finite() && self.zero_tolerance >= 0.0,
            "zero tolerance must be a finite non-negative number, got {}",
            self.zero_tolerance
        );
        if let SystemSource::Random { rhs_columns, .. } = &self.source {
            ensure!(*rhs_columns > 0, "random systems need at least one right-hand side column");
        }
        Ok(())
    }
}
