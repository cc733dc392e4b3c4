use bitvec::prelude::*;
use itertools::Itertools;

use super::equation_row::EquationRow;
use crate::error::TableauError;
use crate::permutations::HeapPermutations;

/// Finds the first row order, in Heap enumeration order, under which row `i`
/// has a nonzero coefficient at column `i` for every `i`.
///
/// Returns the accepted order as indices into `rows`. This is a purely
/// structural check; a pivot can still cancel to zero during elimination.
pub fn find_pivot_ordering(rows: &[EquationRow]) -> Result<Vec<usize>, TableauError> {
    let masks = rows.iter().map(EquationRow::nonzero_columns).collect_vec();
    let mut candidates_tried = 0usize;
    for ordering in HeapPermutations::new((0..rows.len()).collect_vec()) {
        candidates_tried += 1;
        if has_nonzero_diagonal(&masks, &ordering) {
            log::debug!(
                "accepted pivot ordering {:?} after {} candidate(s)",
                ordering,
                candidates_tried
            );
            return Ok(ordering);
        }
    }
    log::debug!(
        "exhausted {} candidate orderings without a nonzero diagonal",
        candidates_tried
    );
    Err(TableauError::NoValidPivotOrdering { rows: rows.len() })
}

fn has_nonzero_diagonal(masks: &[BitVec], ordering: &[usize]) -> bool {
    ordering.iter().enumerate().all(|(column, row_index)| {
        masks[*row_index]
            .get(column)
            .map(|bit| *bit)
            .unwrap_or(false)
    })
}

/// Moves `rows` into the order given by `ordering`, which must be a
/// permutation of `0..rows.len()`.
pub(crate) fn apply_ordering(
    rows: Vec<EquationRow>,
    ordering: &[usize],
) -> Result<Vec<EquationRow>, TableauError> {
    let is_permutation = ordering.len() == rows.len()
        && ordering.iter().all(|index| *index < rows.len())
        && ordering.iter().all_unique();
    if !is_permutation {
        return Err(TableauError::invalid_dimensions(format!(
            "{ordering:?} is not an ordering of {} rows",
            rows.len()
        )));
    }
    let mut slots = rows.into_iter().map(Some).collect_vec();
    Ok(ordering
        .iter()
        .filter_map(|index| slots[*index].take())
        .collect())
}
