//! Budget persistence seam and commit gate.
//!
//! This crate provides:
//! - The `BudgetRepository` abstraction over budget storage
//! - An in-memory repository
//! - `BudgetStore`, which serialises validation and commit per owner and category

pub mod error;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use repositories::{BudgetRepository, InMemoryBudgetRepository};
pub use store::{BudgetStore, ExpenseImpact};
