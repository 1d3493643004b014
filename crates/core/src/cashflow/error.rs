//! Cash-flow report errors.

use fluxo_shared::error::AppError;
use thiserror::Error;

use crate::store::StoreError;

/// Errors produced by the cash-flow aggregator.
///
/// The report either covers the user's full record set or fails as a
/// whole; there are no partial results, so a single store variant is the
/// entire vocabulary.
#[derive(Debug, Error)]
pub enum CashFlowError {
    /// Fetching bills or receivables from the record store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CashFlowError> for AppError {
    fn from(err: CashFlowError) -> Self {
        match err {
            CashFlowError::Store(e) => Self::Store(e.to_string()),
        }
    }
}
