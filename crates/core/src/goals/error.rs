//! Savings goal error types.

use chrono::NaiveDate;
use fedha_shared::AppError;
use thiserror::Error;

/// Savings goal errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalError {
    /// Goal name is empty.
    #[error("Goal name cannot be empty")]
    EmptyName,

    /// Target amount is zero or negative.
    #[error("Target amount must be positive")]
    NonPositiveTarget,

    /// Deadline lies before the reference date.
    #[error("Deadline {deadline} is in the past (today is {today})")]
    DeadlineInPast {
        /// Requested deadline.
        deadline: NaiveDate,
        /// Reference date the deadline was checked against.
        today: NaiveDate,
    },

    /// Contribution is zero or negative.
    #[error("Contribution must be positive")]
    NonPositiveContribution,

    /// Saved amount would exceed the representable range.
    #[error("Saved amount is too large")]
    AmountOverflow,
}

impl From<GoalError> for AppError {
    fn from(err: GoalError) -> Self {
        Self::Validation(err.to_string())
    }
}
