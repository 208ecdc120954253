//! One-time seeding of reference data.

use std::fs::File;
use std::path::Path;

use relief_core::{SEED_REGIONS, read_disasters};
use rusqlite::params;

use super::{Storage, get_conn};
use crate::error::{Result, StorageError};

/// Outcome of [`Storage::initialize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub regions: usize,
    pub disasters: usize,
}

impl Storage {
    /// Seed regions and sample disasters into empty tables.
    ///
    /// Each table is only touched when it is empty, so calling this on every
    /// startup is safe. A missing `sample_csv` is skipped silently.
    ///
    /// # Errors
    /// Returns error if the sample file is unreadable or malformed, or on
    /// database failure.
    pub fn initialize(&self, sample_csv: &Path) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        if self.count_regions()? == 0 {
            report.regions = self.seed_regions()?;
            tracing::info!(count = report.regions, "Seeded regions");
        }

        if self.count_disasters()? == 0 && sample_csv.is_file() {
            let file = File::open(sample_csv)
                .map_err(|source| StorageError::Io { path: sample_csv.to_path_buf(), source })?;
            report.disasters = self.insert_disasters(read_disasters(file)?)?;
            tracing::info!(
                count = report.disasters,
                path = %sample_csv.display(),
                "Seeded disasters from sample CSV"
            );
        }

        Ok(report)
    }

    fn seed_regions(&self) -> Result<usize> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let mut inserted = 0_usize;
        {
            let mut stmt =
                tx.prepare("INSERT OR IGNORE INTO regions (name, population) VALUES (?1, ?2)")?;
            for (name, population) in SEED_REGIONS {
                inserted += stmt.execute(params![name, population])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }
}
