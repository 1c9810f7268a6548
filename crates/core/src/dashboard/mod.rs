//! Dashboard aggregation over income, expense and savings records.
//!
//! This module provides:
//! - Month windows derived from an explicit reference date
//! - Monthly summary metrics and chart series
//! - The filtered transaction feed

pub mod feed;
pub mod summary;
pub mod types;
pub mod window;

pub use feed::{FeedFilter, month_feed};
pub use summary::DashboardSummary;
pub use types::*;
pub use window::MonthWindow;
