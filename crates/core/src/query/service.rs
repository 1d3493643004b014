//! Record query service: the composed pipeline.

use std::marker::PhantomData;
use std::sync::Arc;

use fluxo_shared::types::{PageQuery, UserId};
use tracing::{debug, error};

use super::error::QueryError;
use super::filter::{self, FilterSpec};
use super::order;
use super::paginate::{self, Page};
use crate::calendar::ReportingCalendar;
use crate::record::{RecordFields, SortDirection, SortField, SortOrder};
use crate::store::RecordStore;

/// Query service over one record type.
///
/// One instance serves bills, another receivables; both run the exact
/// same pipeline. The store handle and calendar are injected so hosts
/// and tests decide what backs them.
pub struct RecordQueryService<R, S> {
    store: Arc<S>,
    calendar: ReportingCalendar,
    _record: PhantomData<R>,
}

impl<R, S> RecordQueryService<R, S>
where
    R: RecordFields,
    S: RecordStore<R>,
{
    /// Creates a query service over the given store.
    #[must_use]
    pub fn new(store: Arc<S>, calendar: ReportingCalendar) -> Self {
        Self {
            store,
            calendar,
            _record: PhantomData,
        }
    }

    /// Runs the full query pipeline for one user.
    ///
    /// Fetches the user's complete record set from the store, then
    /// filters, re-orders and paginates it in memory. Sorting by
    /// creation time never re-sorts: the store already returns that
    /// order, so the fetch direction is adjusted instead.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Store`] when the bulk fetch fails. The
    /// in-memory stages cannot fail.
    pub async fn list(
        &self,
        user_id: UserId,
        spec: &FilterSpec,
        ordering: Option<SortOrder>,
        page: PageQuery,
    ) -> Result<Page<R>, QueryError> {
        let fetch_direction = match ordering {
            Some(sort) if sort.field == SortField::CreatedAt => sort.direction,
            _ => SortDirection::Descending,
        };

        let records = self
            .store
            .fetch_all_for_user(user_id, fetch_direction)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %user_id, "Failed to fetch records for query");
                e
            })?;
        let fetched = records.len();

        let today = self.calendar.today();
        let filtered = filter::apply(records, spec, &self.calendar, today);

        let sorted = match ordering {
            Some(sort) if sort.field != SortField::CreatedAt => {
                order::sort_records(filtered, sort.field, sort.direction)
            }
            _ => filtered,
        };

        debug!(
            user_id = %user_id,
            fetched,
            matched = sorted.len(),
            "Record query pipeline complete"
        );

        Ok(paginate::paginate(sorted, page, ordering))
    }
}
