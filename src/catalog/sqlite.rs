//! SqliteCatalogStore - single-table SQLite catalog.

use std::path::{Path, PathBuf};

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use tracing::{debug, info};

use crate::car::{Car, NewCar};
use crate::criteria::Criteria;
use crate::error::StoreError;

use super::{CatalogField, CatalogStore};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS cars (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    brand       TEXT    NOT NULL,
    model       TEXT    NOT NULL,
    body_type   TEXT    NOT NULL,
    price       INTEGER NOT NULL,
    power       INTEGER NOT NULL,
    description TEXT
)";

const SELECT_CARS: &str =
    "SELECT id, brand, model, body_type, price, power, description FROM cars";

/// Catalog stored in a SQLite database file or in memory.
///
/// The handle owns its connection; drop it or call [`close`](Self::close) at
/// shutdown.
#[derive(Debug)]
pub struct SqliteCatalogStore {
    connection: Connection,
    path: Option<PathBuf>,
}

impl SqliteCatalogStore {
    /// Open (or create) the database at `path` and ensure the table exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let connection = Connection::open(&path).map_err(|source| StoreError::Open {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "opened catalog database");
        Self::init(connection, Some(path))
    }

    /// Open a private in-memory database.
    pub fn in_memory() -> Result<Self, StoreError> {
        let connection = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        Self::init(connection, None)
    }

    fn init(connection: Connection, path: Option<PathBuf>) -> Result<Self, StoreError> {
        connection.execute(CREATE_TABLE, [])?;
        Ok(Self { connection, path })
    }

    /// Path of the database file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<(), StoreError> {
        self.connection
            .close()
            .map_err(|(_, error)| StoreError::Sqlite(error))
    }

    fn select(&self, sql: &str, values: Vec<Value>) -> Result<Vec<Car>, StoreError> {
        let mut statement = self.connection.prepare(sql)?;
        let cars = statement
            .query_map(params_from_iter(values), car_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(cars)
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .connection
            .query_row("SELECT COUNT(*) FROM cars", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn insert_all(&self, cars: &[NewCar]) -> Result<Vec<Car>, StoreError> {
        // Rolled back on drop unless committed.
        let tx = self.connection.unchecked_transaction()?;
        let mut stored = Vec::with_capacity(cars.len());
        {
            let mut insert = tx.prepare(
                "INSERT INTO cars (brand, model, body_type, price, power, description)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for car in cars {
                let id = insert.insert(params![
                    car.brand,
                    car.model,
                    car.body_type,
                    car.price,
                    car.power,
                    car.description,
                ])?;
                stored.push(car.clone().into_car(id));
            }
        }
        tx.commit()?;
        Ok(stored)
    }

    fn query_all(&self) -> Result<Vec<Car>, StoreError> {
        self.select(&format!("{SELECT_CARS} ORDER BY id"), Vec::new())
    }

    fn query(&self, criteria: &Criteria) -> Result<Vec<Car>, StoreError> {
        let (clause, values) = where_clause(criteria);
        debug!(clause = %clause, "catalog query");
        self.select(&format!("{SELECT_CARS}{clause} ORDER BY id"), values)
    }

    fn unique_values(&self, field: CatalogField) -> Result<Vec<String>, StoreError> {
        let column = field.column();
        let mut statement = self.connection.prepare(&format!(
            "SELECT DISTINCT {column} FROM cars ORDER BY {column}"
        ))?;
        let values = statement
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(values)
    }
}

/// Build a parameterized `WHERE` clause equivalent to the filter pipeline.
fn where_clause(criteria: &Criteria) -> (String, Vec<Value>) {
    let mut conditions = Vec::new();
    let mut values = Vec::new();

    if let Some(body_type) = criteria.body_type_filter() {
        conditions.push("body_type = ?");
        values.push(Value::Text(body_type.to_string()));
    }
    if let Some(min) = criteria.min_price {
        conditions.push("price >= ?");
        values.push(Value::Integer(to_sql_int(min)));
    }
    if let Some(max) = criteria.max_price {
        conditions.push("price <= ?");
        values.push(Value::Integer(to_sql_int(max)));
    }
    if let Some(brand) = criteria.brand_filter() {
        conditions.push("brand = ?");
        values.push(Value::Text(brand.to_string()));
    }
    if let Some(min) = criteria.min_power {
        conditions.push("power >= ?");
        values.push(Value::Integer(i64::from(min)));
    }
    if let Some(max) = criteria.max_power {
        conditions.push("power <= ?");
        values.push(Value::Integer(i64::from(max)));
    }

    if conditions.is_empty() {
        (String::new(), values)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), values)
    }
}

/// Query bounds above `i64::MAX` clamp; stored prices never exceed it.
fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn car_from_row(row: &Row<'_>) -> rusqlite::Result<Car> {
    let price: i64 = row.get(4)?;
    let power: i64 = row.get(5)?;
    Ok(Car {
        id: row.get(0)?,
        brand: row.get(1)?,
        model: row.get(2)?,
        body_type: row.get(3)?,
        price: u64::try_from(price)
            .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(4, price))?,
        power: u32::try_from(power)
            .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(5, power))?,
        description: row.get(6)?,
    })
}
