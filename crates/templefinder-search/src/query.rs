use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use templefinder_core::{Coordinate, FacilityRecord};
use thiserror::Error;

use crate::error::SearchError;

pub const DEFAULT_RADIUS_MILES: f64 = 50.0;

/// Where a search is centred. Exactly one kind of origin per query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOrigin {
    PostalCode(String),
    Coordinates(Coordinate),
}

impl SearchOrigin {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SearchOrigin::PostalCode(_) => "postal_code",
            SearchOrigin::Coordinates(_) => "coordinates",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub origin: SearchOrigin,
    pub radius_miles: f64,
}

impl SearchQuery {
    #[must_use]
    pub fn postal_code(code: impl Into<String>, radius_miles: f64) -> Self {
        Self {
            origin: SearchOrigin::PostalCode(code.into()),
            radius_miles,
        }
    }

    #[must_use]
    pub fn coordinates(latitude: f64, longitude: f64, radius_miles: f64) -> Self {
        Self {
            origin: SearchOrigin::Coordinates(Coordinate::new(latitude, longitude)),
            radius_miles,
        }
    }
}

/// JSON body of a search request: `{ zipcode?, latitude?, longitude?, radius? }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    pub zipcode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(alias = "radiusMiles", alias = "radius_miles")]
    pub radius: Option<f64>,
}

impl SearchRequest {
    /// Convert the loose wire shape into a [`SearchQuery`], using
    /// `default_radius` when the request has no radius.
    ///
    /// A blank `zipcode` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidQuery`] unless exactly one of a postal
    /// code or a full latitude/longitude pair is present.
    pub fn into_query(self, default_radius: f64) -> Result<SearchQuery, SearchError> {
        let radius_miles = self.radius.unwrap_or(default_radius);
        let zipcode = self.zipcode.filter(|z| !z.trim().is_empty());

        let origin = match (zipcode, self.latitude, self.longitude) {
            (Some(code), None, None) => SearchOrigin::PostalCode(code),
            (None, Some(latitude), Some(longitude)) => {
                SearchOrigin::Coordinates(Coordinate::new(latitude, longitude))
            }
            (None, None, None) => {
                return Err(SearchError::InvalidQuery(
                    "either zipcode or latitude/longitude must be provided".to_string(),
                ))
            }
            (None, _, _) => {
                return Err(SearchError::InvalidQuery(
                    "latitude and longitude must be provided together".to_string(),
                ))
            }
            (Some(_), _, _) => {
                return Err(SearchError::InvalidQuery(
                    "provide either zipcode or latitude/longitude, not both".to_string(),
                ))
            }
        };

        Ok(SearchQuery {
            origin,
            radius_miles,
        })
    }
}

impl TryFrom<SearchRequest> for SearchQuery {
    type Error = SearchError;

    fn try_from(request: SearchRequest) -> Result<Self, Self::Error> {
        request.into_query(DEFAULT_RADIUS_MILES)
    }
}

/// A facility within the search radius. Owns a copy of the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub facility: FacilityRecord,
    /// Miles from the search origin, rounded to one decimal place.
    #[serde(rename = "distance", alias = "distanceMiles")]
    pub distance_miles: f64,
}

/// Display orderings offered on top of the distance-sorted result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Distance,
    Name,
    State,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Distance => write!(f, "distance"),
            SortOrder::Name => write!(f, "name"),
            SortOrder::State => write!(f, "state"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown sort order '{0}'; expected distance, name or state")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(SortOrder::Distance),
            "name" => Ok(SortOrder::Name),
            "state" => Ok(SortOrder::State),
            _ => Err(UnknownSortOrder(s.to_string())),
        }
    }
}

/// Last `", "`-separated segment of an address, e.g. `"NJ 08817 USA"`.
#[must_use]
pub fn state_token(address: &str) -> &str {
    address.rsplit(", ").next().unwrap_or_default()
}

/// Stable re-sort of results for display. Equal keys keep their current order.
pub fn sort_results(results: &mut [SearchResult], order: SortOrder) {
    let compare: fn(&SearchResult, &SearchResult) -> Ordering = match order {
        SortOrder::Distance => |a, b| a.distance_miles.total_cmp(&b.distance_miles),
        SortOrder::Name => |a, b| a.facility.city.cmp(&b.facility.city),
        SortOrder::State => {
            |a, b| state_token(&a.facility.address).cmp(state_token(&b.facility.address))
        }
    };
    results.sort_by(compare);
}
