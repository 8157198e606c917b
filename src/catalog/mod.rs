//! Catalog - storage for the car records.
//!
//! A catalog store is seeded once when empty and read afterwards. Two
//! backends are provided: an in-memory store for tests and embedding, and
//! a single-table SQLite store.
//!
//! ## Example
//!
//! ```ignore
//! use car_advisor::{CatalogExt, CatalogStore, InMemoryCatalogStore};
//!
//! let store = InMemoryCatalogStore::new();
//! store.seed_if_empty()?;
//! let brands = store.unique_brands()?;
//! ```

mod ext;
mod in_memory;
pub mod seed;
#[cfg(feature = "sqlite")]
mod sqlite;
mod store;

use std::fmt;

pub use ext::CatalogExt;
pub use in_memory::InMemoryCatalogStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteCatalogStore;
pub use store::CatalogStore;

/// A text column whose distinct values can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogField {
    Brand,
    BodyType,
}

impl CatalogField {
    /// Column name in the `cars` table.
    pub fn column(self) -> &'static str {
        match self {
            CatalogField::Brand => "brand",
            CatalogField::BodyType => "body_type",
        }
    }
}

impl fmt::Display for CatalogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
