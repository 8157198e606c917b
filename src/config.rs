//! AdvisorConfig - environment-driven settings for opening the catalog.

use std::env;
use std::path::PathBuf;

use serde::Serialize;

pub const DB_ENV: &str = "CARPICK_DB";
pub const SEED_ENV: &str = "CARPICK_SEED";
pub const DEFAULT_DB_FILE: &str = "cars.db";
const IN_MEMORY: &str = ":memory:";

/// Where the catalog database lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DatabaseLocation {
    File(PathBuf),
    InMemory,
}

impl DatabaseLocation {
    /// `:memory:` selects an in-memory database; anything else is a path.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            IN_MEMORY => Self::InMemory,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl Default for DatabaseLocation {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_DB_FILE))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisorConfig {
    pub database: DatabaseLocation,
    pub seed_on_startup: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            database: DatabaseLocation::default(),
            seed_on_startup: true,
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset or
    /// unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            database: lookup(DB_ENV)
                .filter(|v| !v.trim().is_empty())
                .map(|v| DatabaseLocation::parse(&v))
                .unwrap_or(defaults.database),
            seed_on_startup: lookup(SEED_ENV)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.seed_on_startup),
        }
    }

    /// Open the configured SQLite catalog, seeding it if enabled.
    #[cfg(feature = "sqlite")]
    pub fn open_store(&self) -> Result<crate::catalog::SqliteCatalogStore, crate::StoreError> {
        use crate::catalog::{CatalogExt, SqliteCatalogStore};

        let store = match &self.database {
            DatabaseLocation::File(path) => SqliteCatalogStore::open(path)?,
            DatabaseLocation::InMemory => SqliteCatalogStore::in_memory()?,
        };
        if self.seed_on_startup {
            store.seed_if_empty()?;
        }
        Ok(store)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" | "on" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" | "off" => Some(false),
        _ => None,
    }
}
