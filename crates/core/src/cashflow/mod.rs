//! Twelve-month cash-flow aggregation.
//!
//! One summary per calendar month: total and settled incomes, expenses
//! and the resulting profits, bucketed in the reporting timezone.

pub mod error;
pub mod service;
pub mod types;


pub use error::CashFlowError;
pub use service::CashFlowService;
pub use types::MonthSummary;
