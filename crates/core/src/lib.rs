//! Core business logic for Fedha.
//!
//! This crate contains pure business logic with ZERO storage or web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `budget` - Budget periods, overlap validation and usage alerts
//! - `goals` - Savings goal progress and milestones
//! - `dashboard` - Monthly aggregation and the transaction feed

pub mod budget;
pub mod dashboard;
pub mod goals;
