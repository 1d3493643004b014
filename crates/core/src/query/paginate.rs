//! Pagination stage of the record query pipeline.
//!
//! Pagination never fails: unusable `(page, size)` input degrades into
//! an empty envelope and a page past the end comes back empty with the
//! true totals, so callers can always tell the two apart.

use serde::{Deserialize, Serialize};

use fluxo_shared::types::PageQuery;

use crate::record::SortOrder;

/// One page of query results plus the envelope describing the whole
/// result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page.
    pub content: Vec<T>,
    /// Size of the full filtered result set.
    pub total_elements: u64,
    /// Number of pages the result set spans at the requested size.
    pub total_pages: u64,
    /// Requested page, echoed verbatim.
    pub page: Option<i64>,
    /// Requested page size, echoed verbatim.
    pub size: Option<i64>,
    /// Requested ordering, echoed verbatim.
    pub ordering: Option<SortOrder>,
}

impl<T> Page<T> {
    /// The envelope returned for unusable pagination input: no content,
    /// zeroed totals, the caller's raw values echoed back.
    fn degraded(query: PageQuery) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            page: query.page,
            size: query.size,
            ordering: None,
        }
    }
}

/// Cuts one page out of the full record list.
///
/// `ordering` is whatever sort the caller requested; it is echoed in the
/// envelope untouched. Invalid input (missing values, negative page,
/// non-positive size) yields the degraded envelope; a valid page index
/// at or past the end yields empty content with the real totals.
#[must_use]
pub fn paginate<T>(records: Vec<T>, query: PageQuery, ordering: Option<SortOrder>) -> Page<T> {
    let Some((page, size)) = query.validated() else {
        return Page::degraded(query);
    };

    let total_elements = records.len() as u64;
    let total_pages = total_elements.div_ceil(size);

    let start = page.saturating_mul(size);
    let content = if start < total_elements {
        let skip = usize::try_from(start).unwrap_or(usize::MAX);
        let take = usize::try_from(size).unwrap_or(usize::MAX);
        records.into_iter().skip(skip).take(take).collect()
    } else {
        Vec::new()
    };

    Page {
        content,
        total_elements,
        total_pages,
        page: query.page,
        size: query.size,
        ordering,
    }
}
