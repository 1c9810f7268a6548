//! Month-scoped transaction feed.

use serde::{Deserialize, Serialize};

use super::types::{TransactionKind, TransactionRecord};
use super::window::MonthWindow;

/// Which records the feed shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedFilter {
    /// Income and expenses.
    #[default]
    All,
    /// Income only.
    Income,
    /// Expenses only.
    Expense,
}

impl FeedFilter {
    fn admits(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// Records inside `window` matching `filter`, newest first.
///
/// Records sharing a date keep their input order.
#[must_use]
pub fn month_feed(
    records: &[TransactionRecord],
    window: MonthWindow,
    filter: FeedFilter,
) -> Vec<TransactionRecord> {
    let mut feed: Vec<TransactionRecord> = records
        .iter()
        .filter(|r| window.contains(r.date) && filter.admits(r.kind))
        .cloned()
        .collect();
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fedha_shared::types::{TransactionId, UserId};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(kind: TransactionKind, label: &str, on: NaiveDate) -> TransactionRecord {
        TransactionRecord {
            id: TransactionId::new(),
            owner: UserId::new(),
            kind,
            amount: dec!(100),
            label: label.to_string(),
            description: None,
            date: on,
        }
    }

    fn sample() -> Vec<TransactionRecord> {
        vec![
            record(TransactionKind::Expense, "Food", date(2025, 5, 2)),
            record(TransactionKind::Income, "Salary", date(2025, 5, 1)),
            record(TransactionKind::Expense, "Bills", date(2025, 5, 20)),
            record(TransactionKind::Expense, "Shopping", date(2025, 5, 2)),
            record(TransactionKind::Income, "Gift", date(2025, 6, 1)),
        ]
    }

    #[test]
    fn test_feed_sorted_newest_first() {
        let window = MonthWindow::containing(date(2025, 5, 10));
        let labels: Vec<String> = month_feed(&sample(), window, FeedFilter::All)
            .into_iter()
            .map(|r| r.label)
            .collect();

        assert_eq!(labels, vec!["Bills", "Food", "Shopping", "Salary"]);
    }

    #[test]
    fn test_feed_filters_by_kind() {
        let window = MonthWindow::containing(date(2025, 5, 10));

        let income = month_feed(&sample(), window, FeedFilter::Income);
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].label, "Salary");

        let expenses = month_feed(&sample(), window, FeedFilter::Expense);
        assert_eq!(expenses.len(), 3);
        assert!(expenses.iter().all(|r| r.kind == TransactionKind::Expense));
    }
}
