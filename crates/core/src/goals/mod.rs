//! Savings goals, progress and milestone detection.

pub mod error;
pub mod service;
pub mod types;

pub use error::GoalError;
pub use service::GoalService;
pub use types::{Milestone, SavingsGoal};
