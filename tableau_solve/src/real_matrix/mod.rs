pub mod equation_row;
pub mod gauss_jordan;
pub mod pivot_ordering;
pub mod row_side;

pub use equation_row::EquationRow;
pub use gauss_jordan::{EliminationParams, GaussJordan};
pub use row_side::RowSide;
