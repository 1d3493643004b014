//! Pagination request types for list queries.

use serde::{Deserialize, Serialize};

/// Raw pagination input for a list query.
///
/// Both fields are optional on purpose: callers may omit either one, and
/// the query pipeline degrades missing or out-of-range values into an
/// empty result instead of raising an error. No defaulting happens here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: Option<i64>,
    /// Number of items per page.
    #[serde(default)]
    pub size: Option<i64>,
}

impl PageQuery {
    /// Creates a query with both values present.
    #[must_use]
    pub const fn new(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Returns the `(page, size)` pair when both values are present and in
    /// range (`page >= 0`, `size > 0`), or `None` otherwise.
    #[must_use]
    pub fn validated(self) -> Option<(u64, u64)> {
        let page = u64::try_from(self.page?).ok()?;
        let size = self.size?;
        if size <= 0 {
            return None;
        }
        let size = u64::try_from(size).ok()?;
        Some((page, size))
    }
}
