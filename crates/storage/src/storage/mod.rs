//! `SQLite` storage implementation.

// SQLite uses i64 for counts and limits, Rust uses usize
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]

mod disasters;
mod regions;
mod seed;

pub use seed::SeedReport;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use relief_core::{DEFAULT_DB_POOL_SIZE, env_parse_with_default};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn> {
    Ok(pool.get()?)
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        },
    }
}

/// Concurrency settings applied to every pooled connection
fn init_connection(conn: &mut Connection) -> std::result::Result<(), rusqlite::Error> {
    conn.busy_timeout(Duration::from_secs(30))?;
    // journal_mode answers with the resulting mode, so it needs the checked variant.
    let _mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("DISASTER_RELIEF_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE).max(1)
}

impl Storage {
    /// Open (or create) the database at `db_path` and bring its schema up to date.
    ///
    /// Does not seed; call [`Storage::initialize`] once before serving.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or migrations fail.
    pub fn new(db_path: &Path) -> Result<Self> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(
            pool_size = pool_size,
            path = %db_path.display(),
            "Storage initialized with connection pool"
        );

        Ok(Self { pool })
    }
}
