mod car;
pub mod catalog;
pub mod config;
mod criteria;
mod error;
pub mod pipeline;
mod recommend;

pub use car::{Car, NewCar};
pub use catalog::{CatalogExt, CatalogField, CatalogStore, InMemoryCatalogStore};
#[cfg(feature = "sqlite")]
pub use catalog::SqliteCatalogStore;
pub use config::{AdvisorConfig, DatabaseLocation};
pub use criteria::{Criteria, PowerBand, PriceBand};
pub use error::{CriteriaError, StoreError};
pub use pipeline::{FilterPipeline, Stage};
pub use recommend::{RecommendationView, Recommender};
