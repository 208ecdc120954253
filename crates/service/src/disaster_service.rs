use std::sync::Arc;

use relief_core::{NeedsPrediction, RECENT_SEVERITY_WINDOW, Region, estimate_needs, read_disasters};
use relief_storage::{Storage, StorageError};
use tokio::task::spawn_blocking;

use crate::ServiceError;

/// Runs a blocking storage call on the blocking pool.
async fn blocking<T, F>(f: F) -> Result<T, ServiceError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    Ok(spawn_blocking(f).await??)
}

pub struct DisasterService {
    storage: Arc<Storage>,
}

impl DisasterService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn list_regions(&self) -> Result<Vec<Region>, ServiceError> {
        let storage = Arc::clone(&self.storage);
        blocking(move || storage.list_regions()).await
    }

    /// Heuristic needs for `region` from its population and recent severities.
    ///
    /// Unknown regions are estimated with the default population.
    pub async fn predict_needs(&self, region: &str) -> Result<NeedsPrediction, ServiceError> {
        if region.is_empty() {
            return Err(ServiceError::InvalidInput("region param required".to_owned()));
        }
        let storage = Arc::clone(&self.storage);
        let name = region.to_owned();
        let (population, severities) = blocking(move || {
            let population = storage.region_population(&name)?;
            let severities = storage.recent_severity(&name, RECENT_SEVERITY_WINDOW)?;
            Ok((population, severities))
        })
        .await?;

        tracing::debug!(region, population, samples = severities.len(), "predicting needs");
        Ok(estimate_needs(region, population, &severities))
    }

    /// Parse `csv` and insert its rows as one batch, returning the row count.
    ///
    /// A malformed row aborts the batch and nothing is committed.
    pub async fn ingest_csv(&self, csv: Vec<u8>) -> Result<usize, ServiceError> {
        let storage = Arc::clone(&self.storage);
        let result = blocking(move || {
            let rows = read_disasters(csv.as_slice())?;
            storage.insert_disasters(rows)
        })
        .await;
        match &result {
            Ok(inserted) => tracing::info!(inserted, "disaster upload committed"),
            Err(e) => tracing::warn!(error = %e, "disaster upload rejected"),
        }
        result
    }

    pub async fn count_disasters(&self) -> Result<u64, ServiceError> {
        let storage = Arc::clone(&self.storage);
        blocking(move || storage.count_disasters()).await
    }
}
