//! Integration tests for the catalog store contract, run against every backend.

mod scratch;

use car_advisor::catalog::seed::{seed_cars, SEED_SIZE};
use car_advisor::{
    Car, CatalogExt, CatalogField, CatalogStore, Criteria, FilterPipeline, InMemoryCatalogStore,
    NewCar, StoreError,
};
#[cfg(feature = "sqlite")]
use car_advisor::SqliteCatalogStore;
use scratch::ScratchDb;

fn check_seeding<S: CatalogStore>(store: &S) {
    assert_eq!(store.count().unwrap(), 0);
    assert!(store.query_all().unwrap().is_empty());

    assert_eq!(store.seed_if_empty().unwrap(), SEED_SIZE);
    assert_eq!(store.seed_if_empty().unwrap(), 0);

    let cars = store.query_all().unwrap();
    assert_eq!(cars.len(), SEED_SIZE);

    let mut ids: Vec<i64> = cars.iter().map(|car| car.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SEED_SIZE);
}

fn check_query_agrees_with_pipeline<S: CatalogStore>(store: &S) {
    store.seed_if_empty().unwrap();
    let pipeline = FilterPipeline::new();

    let cases = [
        Criteria::new(),
        Criteria::new().with_brand("BMW"),
        Criteria::new().with_body_type(" Внедорожник "),
        Criteria::new().with_price_range(Some(1_000_000), Some(2_000_000)),
        Criteria::new().with_min_power(300).with_body_type("Седан"),
        Criteria::new().with_max_power(100),
        Criteria::new().with_price_range(Some(5_000_000), Some(1_000_000)),
        Criteria::new().with_brand("Nonexistent"),
        Criteria::new().with_body_type("   "),
        Criteria::new().with_brand(""),
    ];

    for criteria in &cases {
        let mut by_store: Vec<i64> = store.query(criteria).unwrap().iter().map(|c| c.id).collect();
        let mut by_pipeline: Vec<i64> = pipeline
            .evaluate(store.query_all().unwrap(), criteria)
            .iter()
            .map(|c| c.id)
            .collect();
        by_store.sort_unstable();
        by_pipeline.sort_unstable();
        assert_eq!(by_store, by_pipeline, "criteria: {criteria:?}");
    }
}

fn check_unique_values<S: CatalogStore>(store: &S) {
    store.seed_if_empty().unwrap();

    let brands = store.unique_brands().unwrap();
    let mut expected: Vec<String> = seed_cars().into_iter().map(|car| car.brand).collect();
    expected.sort();
    expected.dedup();
    assert_eq!(brands, expected);

    assert_eq!(
        store.unique_body_types().unwrap(),
        vec!["Внедорожник", "Купе", "Пикап", "Седан", "Хэтчбек"]
    );
}

#[test]
fn in_memory_seeding() {
    check_seeding(&InMemoryCatalogStore::new());
}

#[test]
fn in_memory_query_agrees_with_pipeline() {
    check_query_agrees_with_pipeline(&InMemoryCatalogStore::new());
}

#[test]
fn in_memory_unique_values() {
    check_unique_values(&InMemoryCatalogStore::new());
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_seeding() {
    check_seeding(&SqliteCatalogStore::in_memory().unwrap());
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_query_agrees_with_pipeline() {
    check_query_agrees_with_pipeline(&SqliteCatalogStore::in_memory().unwrap());
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_unique_values() {
    check_unique_values(&SqliteCatalogStore::in_memory().unwrap());
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_file_survives_reopen() {
    let db = ScratchDb::new("reopen");

    let store = SqliteCatalogStore::open(db.path()).unwrap();
    assert_eq!(store.seed_if_empty().unwrap(), SEED_SIZE);
    let before = store.query_all().unwrap();
    store.close().unwrap();

    let store = SqliteCatalogStore::open(db.path()).unwrap();
    assert_eq!(store.path(), Some(db.path()));
    assert_eq!(store.seed_if_empty().unwrap(), 0);
    assert_eq!(store.query_all().unwrap(), before);
    store.close().unwrap();
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_open_fails_for_missing_directory() {
    let db = ScratchDb::new("missing");
    let path = db.path().join("no-such-dir").join("cars.db");
    let err = SqliteCatalogStore::open(&path).unwrap_err();
    assert!(matches!(err, car_advisor::StoreError::Open { .. }));
}

#[test]
fn inserts_are_visible_to_later_seeding_checks() {
    let store = InMemoryCatalogStore::new();
    store
        .insert_all(&[NewCar::new("Lada", "Niva", "Внедорожник", 1_000_000, 83)])
        .unwrap();
    assert_eq!(store.seed_if_empty().unwrap(), 0);
    assert_eq!(store.unique_brands().unwrap(), vec!["Lada"]);
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_failed_seed_leaves_catalog_empty() {
    let store = SqliteCatalogStore::in_memory().unwrap();
    let batch = [
        NewCar::new("Lada", "Granta", "Седан", 600_000, 90),
        NewCar::new("Lada", "Vesta", "Седан", 900_000, 106),
        NewCar::new("Lada", "Niva", "Внедорожник", u64::MAX, 83),
    ];

    let err = store.seed_with(&batch).unwrap_err();
    assert!(matches!(err, StoreError::Sqlite(_)));
    assert_eq!(store.count().unwrap(), 0);

    assert_eq!(store.seed_if_empty().unwrap(), SEED_SIZE);
    assert_eq!(store.count().unwrap(), SEED_SIZE);
}

/// Store whose writes fail until `writable` is set.
struct ReadOnlyUntil {
    inner: InMemoryCatalogStore,
    writable: std::cell::Cell<bool>,
}

impl CatalogStore for ReadOnlyUntil {
    fn count(&self) -> Result<usize, StoreError> {
        self.inner.count()
    }

    fn insert_all(&self, cars: &[NewCar]) -> Result<Vec<Car>, StoreError> {
        if !self.writable.get() {
            return Err(StoreError::LockPoisoned("insert"));
        }
        self.inner.insert_all(cars)
    }

    fn query_all(&self) -> Result<Vec<Car>, StoreError> {
        self.inner.query_all()
    }

    fn query(&self, criteria: &Criteria) -> Result<Vec<Car>, StoreError> {
        self.inner.query(criteria)
    }

    fn unique_values(&self, field: CatalogField) -> Result<Vec<String>, StoreError> {
        self.inner.unique_values(field)
    }
}

#[test]
fn seed_if_empty_reports_write_failures() {
    let store = ReadOnlyUntil {
        inner: InMemoryCatalogStore::new(),
        writable: std::cell::Cell::new(false),
    };

    let err = store.seed_if_empty().unwrap_err();
    assert!(matches!(err, StoreError::LockPoisoned("insert")));
    assert_eq!(store.count().unwrap(), 0);

    store.writable.set(true);
    assert_eq!(store.seed_if_empty().unwrap(), SEED_SIZE);
}
