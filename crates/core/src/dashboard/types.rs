//! Dashboard data types.

use chrono::NaiveDate;
use fedha_shared::types::{GoalId, TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::Category;

/// Direction of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

/// An income or expense record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Record ID.
    pub id: TransactionId,
    /// Owner of the record.
    pub owner: UserId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Amount (positive).
    pub amount: Decimal,
    /// Expense category or income source.
    pub label: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Date the money moved.
    pub date: NaiveDate,
}

/// Money moved into a savings goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Goal contributed to.
    pub goal_id: GoalId,
    /// Amount contributed.
    pub amount: Decimal,
    /// Date of the contribution.
    pub date: NaiveDate,
}

/// Overall financial health derived from the savings rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialHealth {
    /// Savings rate of 80% or more.
    Excellent,
    /// Savings rate of 60% or more.
    Good,
    /// Savings rate of 40% or more.
    Fair,
    /// Savings rate below 40%.
    Poor,
}

impl FinancialHealth {
    /// Classifies a savings rate percentage. Boundaries are inclusive.
    #[must_use]
    pub fn from_savings_rate(rate: Decimal) -> Self {
        if rate >= Decimal::from(80) {
            Self::Excellent
        } else if rate >= Decimal::from(60) {
            Self::Good
        } else if rate >= Decimal::from(40) {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label.
    pub category: Category,
    /// Summed amount.
    pub amount: Decimal,
}

/// Expense total for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// Day.
    pub date: NaiveDate,
    /// Summed amount.
    pub amount: Decimal,
}
