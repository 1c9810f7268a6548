//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for storage operations,
//! hiding the backend from the rest of the application.

pub mod budget;

pub use budget::{BudgetRepository, InMemoryBudgetRepository};
