//! Financial record model.
//!
//! Bills (expenses) and receivables (income) share one shape: an amount,
//! a primary due/accrual date, a secondary settlement date, a settled
//! flag and classification fields. The [`RecordFields`] trait exposes
//! that shape to the query pipeline so filtering, ordering and
//! pagination are written once for both record types.

pub mod bill;
pub mod category;
pub mod fields;
pub mod receivable;
pub mod sort;
pub mod status;

pub use bill::Bill;
pub use category::{CategoryGroup, CategoryKind, CategoryRef, PaymentMethodKind, PaymentMethodRef};
pub use fields::RecordFields;
pub use receivable::Receivable;
pub use sort::{SortDirection, SortField, SortOrder, SortValue};
pub use status::PaymentStatus;
