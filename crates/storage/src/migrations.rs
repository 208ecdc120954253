//! Database migrations

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 1;

pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!(
        "Database schema version: {} (target: {})",
        current_version,
        SCHEMA_VERSION
    );

    if current_version < 1 {
        tracing::info!("Running migration v1: regions and disasters");
        // `disasters.region` is free text on purpose: uploads may reference
        // regions that do not exist.
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS regions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE,
                population INTEGER
            );

            CREATE TABLE IF NOT EXISTS disasters (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                region TEXT,
                date TEXT,
                severity_score REAL,
                casualties INTEGER,
                displaced INTEGER
            );

            CREATE INDEX IF NOT EXISTS idx_disasters_region_date ON disasters(region, date);
            "#,
        )?;
    }

    if current_version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}
