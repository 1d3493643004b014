//! Sort vocabulary for record queries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields a record list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Monetary amount.
    Amount,
    /// Due/accrual date (bill date or receivable date).
    PrimaryDate,
    /// Settlement date (pay date or receival date).
    SecondaryDate,
    /// Free-text description, compared lexicographically.
    Description,
    /// Creation timestamp. The record store already returns this order
    /// natively, so the pipeline never re-sorts on it.
    CreatedAt,
}

/// Direction of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// A caller-requested ordering: one field, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// Field to order by.
    pub field: SortField,
    /// Direction to order in.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Creates an ascending ordering on the given field.
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending ordering on the given field.
    #[must_use]
    pub const fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Comparable view of a single sort field, so one comparison routine
/// serves numeric, date and text keys uniformly.
///
/// Missing dates order before present ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue<'a> {
    /// A monetary key.
    Amount(Decimal),
    /// A timestamp key; `None` when the record has no such date.
    Instant(Option<DateTime<Utc>>),
    /// A text key.
    Text(&'a str),
}
