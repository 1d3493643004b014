//! Record query pipeline.
//!
//! Filter, ordering and pagination stages plus the service composing
//! them over a single bulk fetch from the record store.

pub mod error;
pub mod filter;
pub mod order;
pub mod paginate;
pub mod service;

#[cfg(test)]
mod props;

pub use error::QueryError;
pub use filter::{DateField, DateFilter, DatePredicate, FilterSpec, StatusFilter};
pub use order::sort_records;
pub use paginate::{Page, paginate};
pub use service::RecordQueryService;
