//! City-level coordinate lookup for facility records.
//!
//! Facilities carry no geocode of their own, so their position is taken from
//! a fixed table of major cities. Matching is a case-insensitive substring
//! test in either direction and the first entry in declaration order wins,
//! even when a later entry would be a closer fit.

use crate::geo::Coordinate;

/// Geographic center of the contiguous United States (near Lebanon, KS).
pub const CONTINENTAL_US_CENTER: Coordinate = Coordinate::new(39.8283, -98.5795);

/// Declaration order is the tie-break; do not sort.
pub const CITY_COORDINATES: &[(&str, Coordinate)] = &[
    ("Agawam", Coordinate::new(42.0695, -72.6148)),
    ("Albany", Coordinate::new(31.5804, -84.1557)),
    ("Allentown", Coordinate::new(40.6023, -75.4714)),
    ("Atlanta", Coordinate::new(33.7490, -84.3880)),
    ("Austin", Coordinate::new(30.2672, -97.7431)),
    ("Beaumont", Coordinate::new(30.0804, -94.1266)),
    ("Birmingham", Coordinate::new(33.5207, -86.8025)),
    ("Boston", Coordinate::new(42.3601, -71.0589)),
    ("Calgary", Coordinate::new(51.0447, -114.0719)),
    ("Charlotte", Coordinate::new(35.2271, -80.8431)),
    ("Chicago", Coordinate::new(41.8781, -87.6298)),
    ("Cincinnati", Coordinate::new(39.1612, -84.4569)),
    ("Cleveland", Coordinate::new(41.4993, -81.6944)),
    ("Columbus", Coordinate::new(39.9612, -82.9988)),
    ("Dallas", Coordinate::new(32.7767, -96.7970)),
    ("Denver", Coordinate::new(39.7392, -104.9903)),
    ("Detroit", Coordinate::new(42.3314, -83.0458)),
    ("Edison", Coordinate::new(40.5187, -74.4121)),
    ("Fresno", Coordinate::new(36.7378, -119.7871)),
    ("Houston", Coordinate::new(29.7604, -95.3698)),
    ("Indianapolis", Coordinate::new(39.7684, -86.1581)),
    ("Jacksonville", Coordinate::new(30.3322, -81.6557)),
    ("Kansas City", Coordinate::new(39.0997, -94.5786)),
    ("Las Vegas", Coordinate::new(36.1699, -115.1398)),
    ("Los Angeles", Coordinate::new(34.0522, -118.2437)),
    ("Memphis", Coordinate::new(35.1495, -90.0490)),
    ("Miami", Coordinate::new(25.7617, -80.1918)),
    ("Minneapolis", Coordinate::new(44.9778, -93.2650)),
    ("Nashville", Coordinate::new(36.1627, -86.7816)),
    ("New York", Coordinate::new(40.7128, -74.0060)),
    ("Orlando", Coordinate::new(28.5383, -81.3792)),
    ("Philadelphia", Coordinate::new(39.9526, -75.1652)),
    ("Phoenix", Coordinate::new(33.4484, -112.0740)),
    ("Pittsburgh", Coordinate::new(40.4406, -79.9959)),
    ("Portland", Coordinate::new(45.5152, -122.6784)),
    ("Raleigh", Coordinate::new(35.7796, -78.6382)),
    ("Sacramento", Coordinate::new(38.5816, -121.4944)),
    ("San Antonio", Coordinate::new(29.4241, -98.4936)),
    ("San Francisco", Coordinate::new(37.7749, -122.4194)),
    ("San Jose", Coordinate::new(37.3382, -121.8863)),
    ("Seattle", Coordinate::new(47.6062, -122.3321)),
    ("Tampa", Coordinate::new(27.9506, -82.4572)),
    ("Toronto", Coordinate::new(43.6532, -79.3832)),
    ("Tucson", Coordinate::new(32.2226, -110.9747)),
    ("Washington", Coordinate::new(38.9072, -77.0369)),
];

/// Approximate coordinate for a city or free-text address.
///
/// Never fails: unmatched names resolve to [`CONTINENTAL_US_CENTER`].
#[must_use]
pub fn resolve_approximate_coordinate(name: &str) -> Coordinate {
    let needle = name.to_lowercase();
    CITY_COORDINATES
        .iter()
        .find(|(key, _)| {
            let key = key.to_lowercase();
            needle.contains(&key) || key.contains(&needle)
        })
        .map_or_else(
            || {
                tracing::trace!(name, "no city table match; using continental center");
                CONTINENTAL_US_CENTER
            },
            |(_, coordinate)| *coordinate,
        )
}
