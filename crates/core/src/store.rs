//! Record store port.
//!
//! The backing document store only knows one native ordering, creation
//! time, so the port exposes a single bulk fetch and everything else
//! (filtering, re-ordering, pagination) happens in memory behind it.

use fluxo_shared::types::UserId;
use thiserror::Error;

use crate::record::SortDirection;

/// Errors surfaced by a record store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The backing store failed or rejected the request.
    #[error("Record store backend error: {0}")]
    Backend(String),
}

/// Port to the document store holding a user's financial records.
///
/// Implementations must return **every** record owned by `user_id`,
/// pre-sorted by creation time in the requested direction. Retries and
/// timeouts are the adapter's concern; the core only sees [`StoreError`].
pub trait RecordStore<R>: Send + Sync {
    /// Fetches all records owned by `user_id`, ordered by creation time.
    fn fetch_all_for_user(
        &self,
        user_id: UserId,
        direction: SortDirection,
    ) -> impl std::future::Future<Output = Result<Vec<R>, StoreError>> + Send;
}
