//! Shared constants for disaster-relief.

/// Population assumed for regions missing from the `regions` table.
pub const DEFAULT_POPULATION: i64 = 1000;

/// Severity used when a region has no recorded disasters.
pub const DEFAULT_SEVERITY: f64 = 4.0;

/// Number of most recent disaster records averaged into the severity.
pub const RECENT_SEVERITY_WINDOW: usize = 10;

/// Upper bound on the reported prediction confidence.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Model name reported with every prediction.
pub const HEURISTIC_MODEL: &str = "heuristic-v1";

/// Regions inserted on first startup.
pub const SEED_REGIONS: [(&str, i64); 3] =
    [("Riverside", 6000), ("Harborview", 4500), ("Greenfield", 3000)];

/// File name of the bundled seed CSV inside the data directory.
pub const SAMPLE_DISASTERS_FILE: &str = "sample_disasters.csv";

/// Database file name inside the service home directory.
pub const DATABASE_FILE: &str = "disaster.db";

/// Data directory name inside the service home directory.
pub const DATA_DIR_NAME: &str = "data";

/// Default r2d2 pool size for the `SQLite` store.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;
