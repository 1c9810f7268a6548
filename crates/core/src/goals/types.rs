//! Savings goal data types.

use chrono::NaiveDate;
use fedha_shared::types::{GoalId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A savings target a user contributes towards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Goal ID.
    pub id: GoalId,
    /// Owner of the goal.
    pub owner: UserId,
    /// Goal name (e.g. "Emergency Fund").
    pub name: String,
    /// Amount to save.
    pub target_amount: Decimal,
    /// Amount saved so far.
    pub saved_amount: Decimal,
    /// Optional date the goal should be reached by.
    pub deadline: Option<NaiveDate>,
}

/// Result of applying a contribution to a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "percent")]
pub enum Milestone {
    /// Progress reached 100% or more.
    GoalAchieved,
    /// Progress crossed the given milestone percentage.
    Reached(u8),
    /// No milestone crossed.
    None,
}
