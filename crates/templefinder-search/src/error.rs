use thiserror::Error;

use crate::repository::RepositoryError;

/// Failures surfaced by [`crate::LocationSearchService::search`].
#[derive(Debug, Error)]
pub enum SearchError {
    /// No usable origin, a malformed postal code, or an invalid radius.
    #[error("invalid search query: {0}")]
    InvalidQuery(String),

    /// The postal code could not be turned into a coordinate. Covers unknown
    /// codes and an unreachable geocoder alike.
    #[error("could not resolve the requested location")]
    LocationNotFound,

    #[error("facility repository unavailable: {0}")]
    RepositoryUnavailable(String),
}

impl From<RepositoryError> for SearchError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Unavailable(reason) => SearchError::RepositoryUnavailable(reason),
        }
    }
}
