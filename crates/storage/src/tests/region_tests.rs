use std::path::Path;

use super::create_test_storage;
use relief_core::{DEFAULT_POPULATION, Region};

#[test]
fn test_fresh_database_has_no_regions() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.list_regions().unwrap().is_empty());
    assert_eq!(storage.count_regions().unwrap(), 0);
}

#[test]
fn test_list_regions_orders_by_name() {
    let (storage, _temp_dir) = create_test_storage();
    storage.initialize(Path::new("/nonexistent/sample.csv")).unwrap();

    let regions = storage.list_regions().unwrap();
    assert_eq!(
        regions,
        vec![
            Region::new("Greenfield", 3000),
            Region::new("Harborview", 4500),
            Region::new("Riverside", 6000),
        ]
    );
    assert_eq!(storage.list_regions().unwrap(), regions);
}

#[test]
fn test_region_population_known_and_unknown() {
    let (storage, _temp_dir) = create_test_storage();
    storage.initialize(Path::new("/nonexistent/sample.csv")).unwrap();

    assert_eq!(storage.region_population("Harborview").unwrap(), 4500);
    assert_eq!(storage.region_population("Atlantis").unwrap(), DEFAULT_POPULATION);
    // Lookups are exact, not case-folded.
    assert_eq!(storage.region_population("riverside").unwrap(), DEFAULT_POPULATION);
}
