pub mod debug_tableau;
pub mod error;
pub mod permutations;
pub mod real_matrix;
pub mod tableau;
pub mod tableau_runs;

pub use error::TableauError;
pub use real_matrix::{EliminationParams, EquationRow, RowSide};
pub use tableau::Tableau;
