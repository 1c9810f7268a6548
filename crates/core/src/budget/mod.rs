//! Budget periods, overlap validation and usage tracking.
//!
//! For one owner and category, no two stored budgets may have intersecting
//! active ranges. [`check_conflict`] decides this for a candidate; storing
//! the candidate is left to the caller.

pub mod conflict;
pub mod error;
pub mod period;
pub mod service;
pub mod types;
pub mod usage;


pub use conflict::check_conflict;
pub use error::BudgetError;
pub use period::{
    ActiveRange, PeriodKind, compute_active_range, normalize_anchor, period_label, ranges_overlap,
};
pub use service::BudgetService;
pub use types::{Budget, Category, ConflictResult};
pub use usage::{BudgetAlert, BudgetUsage, UsageStatus, UsageThresholds};
