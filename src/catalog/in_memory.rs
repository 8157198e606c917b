//! InMemoryCatalogStore - map-backed catalog for tests and embedding.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use crate::car::{Car, NewCar};
use crate::criteria::Criteria;
use crate::error::StoreError;
use crate::pipeline::FilterPipeline;

use super::{CatalogField, CatalogStore};

/// Rows keyed by id, each kept bitcode-encoded.
#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Vec<u8>>,
    last_id: i64,
}

/// In-memory catalog store.
///
/// Ids are assigned in insertion order starting at 1. Clone-friendly via Arc;
/// clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryCatalogStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryCatalogStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored car accepted by `predicate`, in id order.
    pub fn find(&self, predicate: &dyn Fn(&Car) -> bool) -> Result<Vec<Car>, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        let mut results = Vec::new();
        for bytes in table.rows.values() {
            let car = decode(bytes)?;
            if predicate(&car) {
                results.push(car);
            }
        }
        Ok(results)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn count(&self) -> Result<usize, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("count"))?;
        Ok(table.rows.len())
    }

    fn insert_all(&self, cars: &[NewCar]) -> Result<Vec<Car>, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;

        // Encode everything before touching the table so a failure leaves it unchanged.
        let first_id = table.last_id + 1;
        let mut stored = Vec::with_capacity(cars.len());
        let mut encoded = Vec::with_capacity(cars.len());
        for (id, car) in (first_id..).zip(cars) {
            let car = car.clone().into_car(id);
            encoded.push((id, encode(&car)?));
            stored.push(car);
        }

        if let Some(&(id, _)) = encoded.last() {
            table.last_id = id;
        }
        table.rows.extend(encoded);

        Ok(stored)
    }

    fn query_all(&self) -> Result<Vec<Car>, StoreError> {
        self.find(&|_| true)
    }

    fn query(&self, criteria: &Criteria) -> Result<Vec<Car>, StoreError> {
        let pipeline = FilterPipeline::new();
        self.find(&|car| pipeline.accepts(car, criteria))
    }

    fn unique_values(&self, field: CatalogField) -> Result<Vec<String>, StoreError> {
        let values: BTreeSet<String> = self
            .query_all()?
            .into_iter()
            .map(|car| match field {
                CatalogField::Brand => car.brand,
                CatalogField::BodyType => car.body_type,
            })
            .collect();
        Ok(values.into_iter().collect())
    }
}

fn encode(car: &Car) -> Result<Vec<u8>, StoreError> {
    bitcode::serialize(car).map_err(|e| StoreError::Codec(e.to_string()))
}

fn decode(bytes: &[u8]) -> Result<Car, StoreError> {
    bitcode::deserialize(bytes).map_err(|e| StoreError::Codec(e.to_string()))
}
