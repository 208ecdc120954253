use relief_core::{IngestError, NewDisaster};
use rusqlite::params;

use super::{Storage, get_conn, log_row_error};
use crate::error::Result;

const INSERT_DISASTER: &str = "INSERT INTO disasters (region, date, severity_score, casualties, displaced)
       VALUES (?1, ?2, ?3, ?4, ?5)";

impl Storage {
    /// Append one disaster row and return its id.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn insert_disaster(&self, disaster: &NewDisaster) -> Result<i64> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            INSERT_DISASTER,
            params![
                disaster.region,
                disaster.date,
                disaster.severity_score,
                disaster.casualties,
                disaster.displaced,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Insert a batch of parsed rows in a single transaction.
    ///
    /// Rows are inserted as they arrive and committed once at the end. The
    /// first row error rolls back everything inserted so far.
    ///
    /// # Errors
    /// Returns error on the first unparseable row or database failure.
    pub fn insert_disasters<I>(&self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = std::result::Result<NewDisaster, IngestError>>,
    {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let mut inserted = 0_usize;
        {
            let mut stmt = tx.prepare(INSERT_DISASTER)?;
            for row in rows {
                let disaster = row?;
                stmt.execute(params![
                    disaster.region,
                    disaster.date,
                    disaster.severity_score,
                    disaster.casualties,
                    disaster.displaced,
                ])?;
                inserted += 1;
            }
        }
        tx.commit()?;
        tracing::debug!(inserted, "disaster batch committed");
        Ok(inserted)
    }

    /// Up to `limit` severity scores for `region`, newest first.
    ///
    /// Dates are compared as plain strings, so only ISO-style dates order
    /// chronologically.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn recent_severity(&self, region: &str, limit: usize) -> Result<Vec<f64>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT severity_score FROM disasters
               WHERE region = ?1 AND severity_score IS NOT NULL
               ORDER BY date DESC LIMIT ?2",
        )?;
        let scores = stmt
            .query_map(params![region, limit as i64], |row| row.get(0))?
            .filter_map(log_row_error)
            .collect();
        Ok(scores)
    }

    /// Number of rows in `disasters`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn count_disasters(&self) -> Result<u64> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM disasters", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
