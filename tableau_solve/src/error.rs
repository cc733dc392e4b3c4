use thiserror::Error;

/// Failures of tableau construction and elimination.
///
/// Every variant is fatal to the call that produced it; nothing is retried and
/// no partial solution is handed back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableauError {
    /// The shape of the input cannot describe a square system, or two vectors
    /// of different widths were combined.
    #[error("invalid dimensions: {reason}")]
    InvalidDimensions { reason: String },

    /// No ordering of the rows puts a nonzero coefficient on every diagonal
    /// position.
    #[error("no ordering of the {rows} rows has a nonzero coefficient at every diagonal position")]
    NoValidPivotOrdering { rows: usize },

    /// The diagonal coefficient of `row` vanished during forward elimination.
    #[error("system is singular: the pivot of row {row} is zero after forward elimination")]
    SingularSystem { row: usize },
}

impl TableauError {
    pub(crate) fn invalid_dimensions(reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            reason: reason.into(),
        }
    }
}
