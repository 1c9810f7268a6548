//! Budget periods and the date ranges they cover.
//!
//! A budget is active over a closed date interval derived from its period kind
//! and anchor date:
//!
//! - `Monthly`: the whole calendar month containing the anchor.
//! - `Weekly`: the anchor itself plus the following six days.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::BudgetError;

/// Length of a weekly budget window in days.
pub const WEEK_LENGTH_DAYS: u64 = 7;

/// Budget period granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// Rolling 7-day window starting at the anchor date.
    Weekly,
    /// Calendar month containing the anchor date.
    Monthly,
}

impl std::fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

impl std::str::FromStr for PeriodKind {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(BudgetError::UnknownPeriodKind(s.to_string())),
        }
    }
}

/// Closed date interval `[start, end]` during which a budget is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveRange {
    /// First active day (inclusive).
    pub start: NaiveDate,
    /// Last active day (inclusive).
    pub end: NaiveDate,
}

impl ActiveRange {
    /// Returns true if `date` falls within the range, endpoints included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, endpoints included.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Computes the active range for a period kind and anchor date.
///
/// Saturates at `NaiveDate::MAX` for anchors at the very end of the
/// representable calendar.
#[must_use]
pub fn compute_active_range(kind: PeriodKind, anchor: NaiveDate) -> ActiveRange {
    match kind {
        PeriodKind::Monthly => {
            let start = first_of_month(anchor);
            let end = start
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(NaiveDate::MAX);
            ActiveRange { start, end }
        }
        PeriodKind::Weekly => ActiveRange {
            start: anchor,
            end: anchor
                .checked_add_days(Days::new(WEEK_LENGTH_DAYS - 1))
                .unwrap_or(NaiveDate::MAX),
        },
    }
}

/// Inclusive intersection test: ranges that merely touch on one day overlap.
#[must_use]
pub fn ranges_overlap(a: &ActiveRange, b: &ActiveRange) -> bool {
    a.start <= b.end && b.start <= a.end
}

/// Returns the anchor a budget is stored with: the first of the month for
/// monthly budgets, the anchor itself for weekly ones.
#[must_use]
pub fn normalize_anchor(kind: PeriodKind, anchor: NaiveDate) -> NaiveDate {
    match kind {
        PeriodKind::Monthly => first_of_month(anchor),
        PeriodKind::Weekly => anchor,
    }
}

/// Human-readable period name, e.g. `February 2025` or `Week of Feb 25, 2025`.
#[must_use]
pub fn period_label(kind: PeriodKind, anchor: NaiveDate) -> String {
    match kind {
        PeriodKind::Monthly => anchor.format("%B %Y").to_string(),
        PeriodKind::Weekly => anchor.format("Week of %b %-d, %Y").to_string(),
    }
}

/// First day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
