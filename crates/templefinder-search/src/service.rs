use std::future::Future;

use templefinder_core::{
    distance_miles, resolve_approximate_coordinate, round_to_tenth, validate_postal_code,
    Coordinate,
};

use crate::error::SearchError;
use crate::query::{SearchOrigin, SearchQuery, SearchResult};
use crate::repository::FacilityRepository;

/// Turns a validated postal code into a coordinate.
///
/// Implementations return `None` for every failure: unknown code, timeout,
/// unreachable service or an unexpected response. Callers cannot and should
/// not tell these apart.
pub trait PostalCodeResolver: Send + Sync {
    fn resolve_postal_code(&self, code: &str) -> impl Future<Output = Option<Coordinate>> + Send;
}

impl<T: PostalCodeResolver> PostalCodeResolver for &T {
    fn resolve_postal_code(&self, code: &str) -> impl Future<Output = Option<Coordinate>> + Send {
        (**self).resolve_postal_code(code)
    }
}

/// Radius search over an injected facility repository.
///
/// Stateless between calls; concurrent searches only read the repository.
#[derive(Debug)]
pub struct LocationSearchService<R, G> {
    repository: R,
    resolver: G,
}

impl<R, G> LocationSearchService<R, G>
where
    R: FacilityRepository,
    G: PostalCodeResolver,
{
    #[must_use]
    pub fn new(repository: R, resolver: G) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Facilities within `query.radius_miles` of the query origin, nearest first.
    ///
    /// Facilities are placed with the city table using their `city` field
    /// only. Distances are rounded to one decimal after filtering; results
    /// with equal rounded distance keep repository order. An empty result is
    /// not an error, and neither is a negative radius, which matches nothing.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidQuery`] for a malformed postal code or a
    ///   non-finite radius.
    /// - [`SearchError::LocationNotFound`] when the postal code cannot be resolved.
    /// - [`SearchError::RepositoryUnavailable`] when the repository cannot be read.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, SearchError> {
        validate_radius(query.radius_miles)?;

        let origin = self.resolve_origin(&query.origin).await?;
        let facilities = self.repository.get_all()?;
        let scanned = facilities.len();

        let mut results: Vec<SearchResult> = facilities
            .into_iter()
            .filter_map(|facility| {
                let position = resolve_approximate_coordinate(&facility.city);
                let distance = distance_miles(origin, position);
                (distance <= query.radius_miles).then(|| SearchResult {
                    facility,
                    distance_miles: round_to_tenth(distance),
                })
            })
            .collect();

        results.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));

        tracing::debug!(
            origin = query.origin.kind(),
            latitude = origin.latitude,
            longitude = origin.longitude,
            radius_miles = query.radius_miles,
            scanned,
            matched = results.len(),
            "facility search complete"
        );

        Ok(results)
    }

    async fn resolve_origin(&self, origin: &SearchOrigin) -> Result<Coordinate, SearchError> {
        match origin {
            SearchOrigin::Coordinates(coordinate) => Ok(*coordinate),
            SearchOrigin::PostalCode(raw) => {
                let code = validate_postal_code(raw)
                    .map_err(|e| SearchError::InvalidQuery(e.to_string()))?;
                match self.resolver.resolve_postal_code(&code).await {
                    Some(coordinate) => Ok(coordinate),
                    None => {
                        tracing::info!(postal_code = %code, "postal code could not be resolved");
                        Err(SearchError::LocationNotFound)
                    }
                }
            }
        }
    }
}

fn validate_radius(radius_miles: f64) -> Result<(), SearchError> {
    if radius_miles.is_finite() {
        Ok(())
    } else {
        Err(SearchError::InvalidQuery(format!(
            "radius must be a finite number of miles, got {radius_miles}"
        )))
    }
}
