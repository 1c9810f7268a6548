//! Budget store error types.

use fedha_core::budget::{Budget, BudgetError, Category};
use fedha_shared::AppError;
use fedha_shared::types::BudgetId;

/// Error types for budget storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Budget not found.
    #[error("Budget not found: {0}")]
    NotFound(BudgetId),

    /// An update was requested for a budget that has never been stored.
    #[error("Budget has no ID; create it first")]
    MissingId,

    /// A budget with the same owner, category, period and anchor exists.
    #[error("Budget already exists for this category and month")]
    Duplicate,

    /// Category is not one of the configured labels.
    #[error("Unknown budget category: {0}")]
    UnknownCategory(Category),

    /// Candidate overlaps stored budgets; nothing was written.
    #[error("{message}")]
    Conflict {
        /// User-facing description of the overlap.
        message: String,
        /// Overlapping budgets.
        conflicts: Vec<Budget>,
    },

    /// Candidate failed field validation.
    #[error(transparent)]
    Invalid(#[from] BudgetError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound(err.to_string()),
            StoreError::MissingId | StoreError::UnknownCategory(_) | StoreError::Invalid(_) => {
                Self::Validation(err.to_string())
            }
            StoreError::Duplicate | StoreError::Conflict { .. } => Self::Conflict(err.to_string()),
        }
    }
}
