//! Budget error types.

use fedha_shared::AppError;
use thiserror::Error;

/// Budget-related errors.
///
/// Overlap with an existing budget is not an error here: the validator
/// reports it as a [`ConflictResult`](super::ConflictResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// An amount field holds a negative value.
    #[error("{field} cannot be negative")]
    NegativeAmount {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Category label is empty.
    #[error("Budget category cannot be empty")]
    EmptyCategory,

    /// Period kind string is neither `weekly` nor `monthly`.
    #[error("Unknown budget period: {0}")]
    UnknownPeriodKind(String),

    /// An amount would exceed the representable range.
    #[error("{field} is too large")]
    AmountOverflow {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        Self::Validation(err.to_string())
    }
}
