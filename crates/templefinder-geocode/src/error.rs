use thiserror::Error;

/// Errors returned by the postal-code geocoding client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network, TLS, timeout or non-2xx status from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The base URL could not be parsed or joined with the request path.
    #[error("invalid geocoder URL: {0}")]
    InvalidUrl(String),

    /// The response body did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered but listed no places for the code.
    #[error("no places found for postal code {0}")]
    NoPlaces(String),

    /// A place was returned with a latitude or longitude that is not a number.
    #[error("unparsable coordinate '{value}' for postal code {code}")]
    BadCoordinate { code: String, value: String },
}
