//! Budget data types.

use chrono::NaiveDate;
use fedha_shared::types::{BudgetId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::{ActiveRange, PeriodKind, compute_active_range, normalize_anchor};

/// Spending category label (e.g. "Food").
///
/// The vocabulary is supplied by configuration; budget logic only compares
/// labels for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Creates a category from a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A spending cap for one category over one period window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID, `None` until the budget has been stored.
    pub id: Option<BudgetId>,
    /// User who owns the budget.
    pub owner: UserId,
    /// Spending category.
    pub category: Category,
    /// Weekly or monthly window.
    pub period_kind: PeriodKind,
    /// Date seeding the active range.
    pub anchor_date: NaiveDate,
    /// Cap for the period.
    pub limit_amount: Decimal,
    /// Amount spent so far, maintained by expense recording.
    pub spent_amount: Decimal,
}

impl Budget {
    /// Creates a not-yet-stored candidate with nothing spent.
    #[must_use]
    pub fn draft(
        owner: UserId,
        category: impl Into<Category>,
        period_kind: PeriodKind,
        anchor_date: NaiveDate,
        limit_amount: Decimal,
    ) -> Self {
        Self {
            id: None,
            owner,
            category: category.into(),
            period_kind,
            anchor_date,
            limit_amount,
            spent_amount: Decimal::ZERO,
        }
    }

    /// Returns the budget with the given ID.
    #[must_use]
    pub fn with_id(mut self, id: BudgetId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the budget with its anchor normalised for storage.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.anchor_date = normalize_anchor(self.period_kind, self.anchor_date);
        self
    }

    /// Date range during which this budget is active.
    #[must_use]
    pub fn active_range(&self) -> ActiveRange {
        compute_active_range(self.period_kind, self.anchor_date)
    }
}

/// Outcome of checking a candidate against existing budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictResult {
    /// True iff `conflicts` is non-empty.
    pub has_conflict: bool,
    /// Overlapping budgets, in the order they were supplied.
    pub conflicts: Vec<Budget>,
}

impl ConflictResult {
    /// Builds a result from the collected conflicts.
    #[must_use]
    pub fn from_conflicts(conflicts: Vec<Budget>) -> Self {
        Self {
            has_conflict: !conflicts.is_empty(),
            conflicts,
        }
    }

    /// A result with no conflicts.
    #[must_use]
    pub fn clear() -> Self {
        Self::from_conflicts(Vec::new())
    }
}
