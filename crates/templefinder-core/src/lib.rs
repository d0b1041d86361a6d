pub mod app_config;
pub mod cities;
pub mod config;
pub mod facilities;
pub mod geo;
pub mod images;
pub mod postal;

pub use app_config::{AppConfig, Environment};
pub use cities::{resolve_approximate_coordinate, CONTINENTAL_US_CENTER};
pub use config::{load_app_config, load_app_config_from_env};
pub use facilities::{load_facilities, FacilitiesFile, FacilityConfig, FacilityRecord};
pub use geo::{distance_miles, round_to_tenth, Coordinate, EARTH_RADIUS_MILES};
pub use images::image_url_for_city;
pub use postal::{validate_postal_code, PostalCodeError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read facilities file {path}: {source}")]
    FacilitiesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse facilities file: {0}")]
    FacilitiesFileParse(#[from] serde_yaml::Error),

    #[error("facilities validation failed: {0}")]
    Validation(String),
}
