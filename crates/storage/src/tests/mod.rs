//! Test utilities and module declarations for storage tests.

use crate::Storage;
use relief_core::NewDisaster;
use tempfile::TempDir;

pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn disaster(region: &str, date: &str, severity: f64) -> NewDisaster {
    NewDisaster::new(region, date, severity).casualties(2).displaced(40)
}

mod region_tests;
