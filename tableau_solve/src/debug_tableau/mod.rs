use crate::{real_matrix::EquationRow, tableau::Tableau};

pub fn debug_rows(rows: &[EquationRow]) {
    for row in rows.iter() {
        println!("{}", row);
    }
}

pub fn debug_tableau(tableau: &Tableau) {
    println!(
        "tableau: {} equations, {} result column(s)",
        tableau.dimension(),
        tableau.result_width()
    );
    debug_rows(tableau.rows());
}
