//! Core business logic for Fluxo.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The record model, the query pipeline and the cash-flow aggregation live here;
//! persistence sits behind the [`store::RecordStore`] port.
//!
//! # Modules
//!
//! - `record` - Bills, receivables and the field trait they share
//! - `calendar` - Timezone-aware reporting calendar
//! - `store` - Port to the backing record store
//! - `query` - Filter / ordering / pagination pipeline
//! - `cashflow` - Twelve-month income and expense aggregation

pub mod calendar;
pub mod cashflow;
pub mod query;
pub mod record;
pub mod store;
