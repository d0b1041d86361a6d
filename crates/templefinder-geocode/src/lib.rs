//! Postal-code geocoding over HTTP.
//!
//! [`ZippopotamClient`] talks to a Zippopotam-compatible service
//! (`GET {base}/{country}/{zip}`) and implements
//! [`templefinder_search::PostalCodeResolver`] by collapsing every failure to
//! "not found".

pub mod client;
pub mod error;
pub mod types;

pub use client::ZippopotamClient;
pub use error::GeocodeError;
