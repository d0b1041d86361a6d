//! Response shapes for the Zippopotam API.
//!
//! Only the fields the resolver reads are modelled; the service also returns
//! country and place names, which are ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PostalCodeResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

/// Zippopotam encodes coordinates as strings, e.g. `"40.7484"`.
#[derive(Debug, Deserialize)]
pub struct Place {
    pub latitude: String,
    pub longitude: String,
}
