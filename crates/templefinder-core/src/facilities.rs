use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::images::image_url_for_city;
use crate::ConfigError;

/// A facility as served to callers. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRecord {
    pub id: i64,
    pub city: String,
    pub address: String,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub operating_hours: Option<String>,
    pub operating_days: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
}

/// One entry of `facilities.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilityConfig {
    pub city: String,
    pub address: String,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub operating_hours: Option<String>,
    pub operating_days: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
}

impl FacilityConfig {
    /// Build the served record, normalising blank optional text to `None`
    /// and filling `image_url` from the photo table when not given.
    #[must_use]
    pub fn into_record(self, id: i64) -> FacilityRecord {
        let city = self.city.trim().to_string();
        let image_url = non_blank(self.image_url)
            .or_else(|| image_url_for_city(&city).map(ToOwned::to_owned));

        FacilityRecord {
            id,
            address: self.address.trim().to_string(),
            phone: non_blank(self.phone),
            fax: non_blank(self.fax),
            email: non_blank(self.email),
            operating_hours: non_blank(self.operating_hours),
            operating_days: non_blank(self.operating_days),
            latitude: self.latitude,
            longitude: self.longitude,
            image_url,
            city,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FacilitiesFile {
    pub facilities: Vec<FacilityConfig>,
}

impl FacilitiesFile {
    /// Convert entries to records with sequential ids starting at 1, in file order.
    #[must_use]
    pub fn into_records(self) -> Vec<FacilityRecord> {
        self.facilities
            .into_iter()
            .zip(1_i64..)
            .map(|(entry, id)| entry.into_record(id))
            .collect()
    }
}

/// Load and validate the facility dataset from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_facilities(path: &Path) -> Result<Vec<FacilityRecord>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FacilitiesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let records = parse_facilities(&content)?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded facilities");
    Ok(records)
}

/// Parse and validate facility YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_facilities(content: &str) -> Result<Vec<FacilityRecord>, ConfigError> {
    let file: FacilitiesFile = serde_yaml::from_str(content)?;
    validate_facilities(&file)?;
    Ok(file.into_records())
}

fn validate_facilities(file: &FacilitiesFile) -> Result<(), ConfigError> {
    let mut seen_cities = HashSet::new();

    for (index, facility) in file.facilities.iter().enumerate() {
        if facility.city.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "facility #{} has an empty city",
                index + 1
            )));
        }

        if facility.address.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "facility '{}' has an empty address",
                facility.city
            )));
        }

        if !seen_cities.insert(facility.city.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate facility city: '{}'",
                facility.city
            )));
        }
    }

    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "facilities_test.rs"]
mod tests;
