//! Calendar month windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::budget::period::{PeriodKind, compute_active_range};

/// Closed date interval covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    /// First day of the month.
    pub start: NaiveDate,
    /// Last day of the month.
    pub end: NaiveDate,
}

impl MonthWindow {
    /// The month containing `reference`.
    #[must_use]
    pub fn containing(reference: NaiveDate) -> Self {
        let range = compute_active_range(PeriodKind::Monthly, reference);
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Returns true if `date` falls within the month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Month name and year, e.g. `March 2025`.
    #[must_use]
    pub fn label(&self) -> String {
        self.start.format("%B %Y").to_string()
    }
}
