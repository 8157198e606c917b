//! Car - the catalog record.

use serde::{Deserialize, Serialize};

/// A stored car. Ids are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub body_type: String,
    pub price: u64,
    pub power: u32,
    pub description: Option<String>,
}

/// A car that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub body_type: String,
    pub price: u64,
    pub power: u32,
    pub description: Option<String>,
}

impl NewCar {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        body_type: impl Into<String>,
        price: u64,
        power: u32,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            body_type: body_type.into(),
            price,
            power,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a store-assigned id.
    pub fn into_car(self, id: i64) -> Car {
        Car {
            id,
            brand: self.brand,
            model: self.model,
            body_type: self.body_type,
            price: self.price,
            power: self.power,
            description: self.description,
        }
    }
}
