use std::collections::HashMap;

use templefinder_core::{FacilityConfig, FacilityRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Backing storage could not be read. The in-memory repository never
    /// returns this.
    #[error("facility storage unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the facility dataset.
pub trait FacilityRepository: Send + Sync {
    /// All facilities, in repository order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if storage cannot be read.
    fn get_all(&self) -> Result<Vec<FacilityRecord>, RepositoryError>;

    /// # Errors
    ///
    /// Returns [`RepositoryError::Unavailable`] if storage cannot be read.
    fn get_by_id(&self, id: i64) -> Result<Option<FacilityRecord>, RepositoryError>;
}

/// Facilities held in memory, filled once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFacilityRepository {
    records: Vec<FacilityRecord>,
    by_id: HashMap<i64, usize>,
    next_id: i64,
}

impl InMemoryFacilityRepository {
    /// Build from already-identified records, keeping their order.
    ///
    /// If two records share an id, lookups by id return the first.
    #[must_use]
    pub fn from_records(records: Vec<FacilityRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_id.contains_key(&record.id) {
                tracing::warn!(id = record.id, city = %record.city, "duplicate facility id; keeping first");
                continue;
            }
            by_id.insert(record.id, index);
        }
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;

        Self {
            records,
            by_id,
            next_id,
        }
    }

    /// Add a facility with the next sequential id and return the stored record.
    ///
    /// This is the programmatic creation path for callers that build a
    /// dataset in code rather than from `facilities.yaml`. Blank optional
    /// fields are normalised and `image_url` is filled from the city image
    /// table, exactly as for loaded records. Only available while the
    /// repository is still owned mutably, i.e. before it is handed to a
    /// search service.
    pub fn insert(&mut self, facility: FacilityConfig) -> FacilityRecord {
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        let record = facility.into_record(id);
        self.by_id.insert(id, self.records.len());
        self.records.push(record.clone());
        record
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FacilityRepository for InMemoryFacilityRepository {
    fn get_all(&self) -> Result<Vec<FacilityRecord>, RepositoryError> {
        Ok(self.records.clone())
    }

    fn get_by_id(&self, id: i64) -> Result<Option<FacilityRecord>, RepositoryError> {
        Ok(self
            .by_id
            .get(&id)
            .and_then(|&index| self.records.get(index))
            .cloned())
    }
}
