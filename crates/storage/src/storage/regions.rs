use relief_core::{DEFAULT_POPULATION, Region};
use rusqlite::{OptionalExtension as _, params};

use super::{Storage, get_conn, log_row_error};
use crate::error::Result;

impl Storage {
    /// All regions ordered by name.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_regions(&self) -> Result<Vec<Region>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare("SELECT name, population FROM regions ORDER BY name")?;
        let regions = stmt
            .query_map([], |row| Ok(Region::new(row.get::<_, String>(0)?, row.get(1)?)))?
            .filter_map(log_row_error)
            .collect();
        Ok(regions)
    }

    /// Population of `name`, or [`DEFAULT_POPULATION`] when the region is unknown.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn region_population(&self, name: &str) -> Result<i64> {
        let conn = get_conn(&self.pool)?;
        let population: Option<i64> = conn
            .query_row("SELECT population FROM regions WHERE name = ?1", params![name], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(population.unwrap_or_else(|| {
            tracing::debug!(region = name, "unknown region, using default population");
            DEFAULT_POPULATION
        }))
    }

    /// Number of rows in `regions`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn count_regions(&self) -> Result<u64> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM regions", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
