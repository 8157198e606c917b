//! Recommender - the facade the presentation layer talks to.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::car::Car;
use crate::catalog::{CatalogExt, CatalogStore};
use crate::criteria::Criteria;
use crate::error::StoreError;
use crate::pipeline::FilterPipeline;

/// What the user sees for each recommended car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationView {
    pub brand: String,
    pub model: String,
    pub body_type: String,
    pub price: u64,
    pub power: u32,
    pub description: String,
}

impl From<Car> for RecommendationView {
    fn from(car: Car) -> Self {
        Self {
            brand: car.brand,
            model: car.model,
            body_type: car.body_type,
            price: car.price,
            power: car.power,
            description: car.description.unwrap_or_default(),
        }
    }
}

/// Runs the whole catalog through the filter pipeline and sorts the result.
///
/// Holds an explicit store handle; the caller decides when the store is
/// opened and closed.
pub struct Recommender<S> {
    store: S,
    pipeline: FilterPipeline,
}

impl<S: CatalogStore> Recommender<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            pipeline: FilterPipeline::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pipeline(&self) -> &FilterPipeline {
        &self.pipeline
    }

    /// Give the store back, e.g. to close it.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Cars matching `criteria`, cheapest first.
    ///
    /// Cars with equal prices keep id order. An empty catalog or no match
    /// yields an empty list.
    pub fn recommend(&self, criteria: &Criteria) -> Result<Vec<RecommendationView>, StoreError> {
        let all = self.store.query_all()?;
        let total = all.len();

        let mut matched = self.pipeline.evaluate(all, criteria);
        matched.sort_by_key(|car| (car.price, car.id));
        debug!(total, matched = matched.len(), "recommendation");

        Ok(matched.into_iter().map(RecommendationView::from).collect())
    }

    /// Number of cars in the catalog.
    pub fn catalog_size(&self) -> Result<usize, StoreError> {
        self.store.count()
    }

    pub fn brands(&self) -> Result<Vec<String>, StoreError> {
        self.store.unique_brands()
    }

    pub fn body_types(&self) -> Result<Vec<String>, StoreError> {
        self.store.unique_body_types()
    }
}
