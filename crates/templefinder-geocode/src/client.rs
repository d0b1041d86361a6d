//! HTTP client for Zippopotam-style postal-code lookups.

use std::time::Duration;

use reqwest::{Client, Url};
use templefinder_core::postal::zip5;
use templefinder_core::{AppConfig, Coordinate};
use templefinder_search::PostalCodeResolver;

use crate::error::GeocodeError;
use crate::types::PostalCodeResponse;

/// Postal-code geocoder. One request per lookup, no retries.
///
/// Use [`ZippopotamClient::from_config`] in the binaries or
/// [`ZippopotamClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct ZippopotamClient {
    client: Client,
    base_url: Url,
    country: String,
}

impl ZippopotamClient {
    /// Creates a client from the geocoder settings in [`AppConfig`].
    ///
    /// # Errors
    ///
    /// See [`ZippopotamClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GeocodeError> {
        Self::with_base_url(
            &config.geocoder_base_url,
            &config.geocoder_country,
            config.geocoder_timeout_secs,
            &config.geocoder_user_agent,
        )
    }

    /// Creates a client with a custom base URL and country segment.
    ///
    /// `timeout_secs` bounds the whole request; a lookup that exceeds it
    /// fails like any other network error.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`GeocodeError::InvalidUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        country: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends rather than replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| GeocodeError::InvalidUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            country: country.trim_matches('/').to_ascii_lowercase(),
        })
    }

    /// Looks up the first place listed for `code`.
    ///
    /// ZIP+4 codes are looked up by their 5-digit prefix.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure, timeout or non-2xx status.
    /// - [`GeocodeError::Deserialize`] if the body is not the expected JSON.
    /// - [`GeocodeError::NoPlaces`] if the code has no places.
    /// - [`GeocodeError::BadCoordinate`] if the first place has a
    ///   non-numeric latitude or longitude.
    pub async fn lookup(&self, code: &str) -> Result<Coordinate, GeocodeError> {
        let key = zip5(code.trim());
        let url = self
            .base_url
            .join(&format!("{}/{key}", self.country))
            .map_err(|e| GeocodeError::InvalidUrl(e.to_string()))?;

        tracing::debug!(%url, "geocoding postal code");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: PostalCodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("postal code {key}"),
                source: e,
            })?;

        let place = response
            .places
            .first()
            .ok_or_else(|| GeocodeError::NoPlaces(key.to_string()))?;

        let parse = |value: &str| -> Result<f64, GeocodeError> {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| GeocodeError::BadCoordinate {
                    code: key.to_string(),
                    value: value.to_string(),
                })
        };

        Ok(Coordinate::new(
            parse(&place.latitude)?,
            parse(&place.longitude)?,
        ))
    }
}

impl PostalCodeResolver for ZippopotamClient {
    async fn resolve_postal_code(&self, code: &str) -> Option<Coordinate> {
        match self.lookup(code).await {
            Ok(coordinate) => Some(coordinate),
            Err(e) => {
                tracing::warn!(postal_code = code, error = %e, "postal code lookup failed");
                None
            }
        }
    }
}
