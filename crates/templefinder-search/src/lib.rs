//! Location search over the facility dataset.
//!
//! A [`LocationSearchService`] owns an injected [`FacilityRepository`] and a
//! [`PostalCodeResolver`]; it resolves the query origin, places every
//! facility via the city table and returns those within the radius, nearest
//! first.

pub mod error;
pub mod query;
pub mod repository;
pub mod service;

pub use error::SearchError;
pub use query::{
    sort_results, state_token, SearchOrigin, SearchQuery, SearchRequest, SearchResult, SortOrder,
    UnknownSortOrder, DEFAULT_RADIUS_MILES,
};
pub use repository::{FacilityRepository, InMemoryFacilityRepository, RepositoryError};
pub use service::{LocationSearchService, PostalCodeResolver};
