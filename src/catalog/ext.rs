//! CatalogExt - seeding and convenience lookups for any catalog store.

use tracing::{debug, info};

use crate::car::NewCar;
use crate::error::StoreError;

use super::{seed, CatalogField, CatalogStore};

/// Extension methods available on every `CatalogStore`.
pub trait CatalogExt: CatalogStore {
    /// Insert the built-in seed set when the store is empty.
    ///
    /// Returns the number of rows inserted, which is zero when the store
    /// already held records. Safe to call on every startup.
    fn seed_if_empty(&self) -> Result<usize, StoreError> {
        self.seed_with(&seed::seed_cars())
    }

    /// Insert `cars` when the store is empty.
    fn seed_with(&self, cars: &[NewCar]) -> Result<usize, StoreError> {
        let existing = self.count()?;
        if existing > 0 {
            debug!(existing, "catalog already seeded");
            return Ok(0);
        }

        let inserted = self.insert_all(cars)?.len();
        info!(inserted, "seeded empty catalog");
        Ok(inserted)
    }

    fn unique_brands(&self) -> Result<Vec<String>, StoreError> {
        self.unique_values(CatalogField::Brand)
    }

    fn unique_body_types(&self) -> Result<Vec<String>, StoreError> {
        self.unique_values(CatalogField::BodyType)
    }
}

impl<S: CatalogStore + ?Sized> CatalogExt for S {}
