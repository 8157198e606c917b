//! CatalogStore - abstract storage for car records.

use crate::car::{Car, NewCar};
use crate::criteria::Criteria;
use crate::error::StoreError;

use super::CatalogField;

/// Read-mostly storage for the car catalog.
///
/// There are no update or delete operations; records are inserted once and
/// then only read.
pub trait CatalogStore {
    /// Number of stored records.
    fn count(&self) -> Result<usize, StoreError>;

    /// Insert every car in one transaction and return them with their ids.
    /// Either all rows are stored or none are.
    fn insert_all(&self, cars: &[NewCar]) -> Result<Vec<Car>, StoreError>;

    /// Every stored record. Callers must sort if they care about order.
    fn query_all(&self) -> Result<Vec<Car>, StoreError>;

    /// Records matching `criteria`, filtered by the store itself.
    fn query(&self, criteria: &Criteria) -> Result<Vec<Car>, StoreError>;

    /// Distinct values of `field`, sorted ascending.
    fn unique_values(&self, field: CatalogField) -> Result<Vec<String>, StoreError>;
}
