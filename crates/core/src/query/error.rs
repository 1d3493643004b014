//! Query pipeline errors.

use fluxo_shared::error::AppError;
use thiserror::Error;

use crate::store::StoreError;

/// Errors produced by the record query pipeline.
///
/// The in-memory stages are infallible; the only failure point is the
/// bulk fetch from the record store.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The bulk fetch from the record store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Store(e) => Self::Store(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_maps_to_app_store_error() {
        let err = QueryError::Store(StoreError::Unavailable("connection refused".to_string()));
        let app: AppError = err.into();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.error_code(), "STORE_ERROR");
    }
}
