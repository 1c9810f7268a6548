//! Budget service: candidate validation, conflict reporting and usage.

use fedha_shared::types::BudgetId;
use rust_decimal::Decimal;

use super::conflict::check_conflict;
use super::error::BudgetError;
use super::period::period_label;
use super::types::{Budget, ConflictResult};
use super::usage::{BudgetUsage, UsageThresholds};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Validate the field-level rules a candidate must satisfy before the
    /// overlap check runs.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::EmptyCategory` if the category label is blank.
    /// Returns `BudgetError::NegativeAmount` if either amount is negative.
    pub fn validate_candidate(candidate: &Budget) -> Result<(), BudgetError> {
        if candidate.category.as_str().trim().is_empty() {
            return Err(BudgetError::EmptyCategory);
        }

        if candidate.limit_amount < Decimal::ZERO {
            return Err(BudgetError::NegativeAmount {
                field: "limit_amount",
            });
        }

        if candidate.spent_amount < Decimal::ZERO {
            return Err(BudgetError::NegativeAmount {
                field: "spent_amount",
            });
        }

        Ok(())
    }

    /// Validates the candidate's fields, then checks it against `existing`.
    ///
    /// # Errors
    ///
    /// Returns the field-level error from [`Self::validate_candidate`].
    /// Overlaps are reported in the `Ok` value, not as errors.
    pub fn admit(
        candidate: &Budget,
        existing: &[Budget],
        exclude_id: Option<BudgetId>,
    ) -> Result<ConflictResult, BudgetError> {
        Self::validate_candidate(candidate)?;
        Ok(check_conflict(candidate, existing, exclude_id))
    }

    /// Message shown when a candidate is rejected for overlapping, naming the
    /// category and the periods involved. `None` if there is no conflict.
    #[must_use]
    pub fn conflict_message(candidate: &Budget, result: &ConflictResult) -> Option<String> {
        let first = result.conflicts.first()?;

        let mut message = format!(
            "{} budget for {} overlaps the existing {} budget for {}",
            candidate.category,
            period_label(candidate.period_kind, candidate.anchor_date),
            first.period_kind,
            period_label(first.period_kind, first.anchor_date),
        );
        if result.conflicts.len() > 1 {
            message.push_str(&format!(" and {} more", result.conflicts.len() - 1));
        }

        Some(message)
    }

    /// Usage of a budget against its limit.
    #[must_use]
    pub fn usage(budget: &Budget, thresholds: &UsageThresholds) -> BudgetUsage {
        BudgetUsage::calculate(budget.limit_amount, budget.spent_amount, thresholds)
    }
}
