//! Storage layer for disaster-relief
//!
//! `SQLite` tables for regions and disaster events behind an r2d2 pool.
//! All methods are synchronous; async callers wrap them in `spawn_blocking`.

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;

pub use error::{Result, StorageError};
pub use storage::{SeedReport, Storage};
