//! Monthly dashboard summary.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fedha_shared::types::checked_percent;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{
    CategoryTotal, Contribution, DailyTotal, FinancialHealth, TransactionKind, TransactionRecord,
};
use super::window::MonthWindow;
use crate::goals::SavingsGoal;

/// Key figures and chart series for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Month the figures cover.
    pub window: MonthWindow,
    /// Income received in the month.
    pub total_income: Decimal,
    /// Expenses paid in the month.
    pub total_expenses: Decimal,
    /// Savings contributions made in the month.
    pub total_contributions: Decimal,
    /// `income - expenses - contributions`.
    pub net_balance: Decimal,
    /// `income - expenses`.
    pub remaining_budget: Decimal,
    /// Amount saved across all goals.
    pub savings_progress: Decimal,
    /// Number of goals.
    pub goal_count: usize,
    /// `net_balance / income * 100`, 2 decimal places; 0 without income.
    pub savings_rate: Decimal,
    /// Health classification of the savings rate.
    pub health: FinancialHealth,
    /// Expenses per category, in order of first appearance.
    pub expenses_by_category: Vec<CategoryTotal>,
    /// Expenses per day, ascending by date.
    pub daily_expenses: Vec<DailyTotal>,
}

impl DashboardSummary {
    /// Aggregates the records falling inside `window`.
    ///
    /// Goals are not windowed: their saved amounts are lifetime totals.
    #[must_use]
    pub fn compute(
        window: MonthWindow,
        transactions: &[TransactionRecord],
        contributions: &[Contribution],
        goals: &[SavingsGoal],
    ) -> Self {
        let mut total_income = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        let mut by_category: Vec<CategoryTotal> = Vec::new();
        let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

        for record in transactions.iter().filter(|r| window.contains(r.date)) {
            match record.kind {
                TransactionKind::Income => total_income += record.amount,
                TransactionKind::Expense => {
                    total_expenses += record.amount;
                    *by_day.entry(record.date).or_default() += record.amount;

                    match by_category
                        .iter_mut()
                        .find(|t| t.category.as_str() == record.label)
                    {
                        Some(total) => total.amount += record.amount,
                        None => by_category.push(CategoryTotal {
                            category: record.label.as_str().into(),
                            amount: record.amount,
                        }),
                    }
                }
            }
        }

        let total_contributions: Decimal = contributions
            .iter()
            .filter(|c| window.contains(c.date))
            .map(|c| c.amount)
            .sum();

        let net_balance = total_income - total_expenses - total_contributions;
        // Net never exceeds income, so only a deeply negative rate can overflow.
        let savings_rate = if total_income > Decimal::ZERO {
            checked_percent(net_balance, total_income)
                .map_or(Decimal::MIN, |rate| rate.round_dp(2))
        } else {
            Decimal::ZERO
        };

        Self {
            window,
            total_income,
            total_expenses,
            total_contributions,
            net_balance,
            remaining_budget: total_income - total_expenses,
            savings_progress: goals.iter().map(|g| g.saved_amount).sum(),
            goal_count: goals.len(),
            savings_rate,
            health: FinancialHealth::from_savings_rate(savings_rate),
            expenses_by_category: by_category,
            daily_expenses: by_day
                .into_iter()
                .map(|(date, amount)| DailyTotal { date, amount })
                .collect(),
        }
    }
}
