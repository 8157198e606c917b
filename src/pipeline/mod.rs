//! Filter pipeline - narrows a car list by a fixed sequence of stages.
//!
//! The stages run in a fixed order: body type, price, brand, power. Each stage
//! is an independent predicate, so the order never changes the result, only
//! how quickly the candidate list shrinks.
//!
//! ## Example
//!
//! ```ignore
//! use car_advisor::{Criteria, FilterPipeline};
//!
//! let pipeline = FilterPipeline::new();
//! let sedans = pipeline.evaluate(cars, &Criteria::new().with_body_type("Седан"));
//! ```

mod stage;

pub use stage::Stage;

use tracing::debug;

use crate::car::Car;
use crate::criteria::Criteria;

/// Fixed-order sequence of filter stages.
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    stages: [Stage; 4],
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPipeline {
    pub const ORDER: [Stage; 4] = [Stage::BodyType, Stage::Price, Stage::Brand, Stage::Power];

    pub fn new() -> Self {
        Self {
            stages: Self::ORDER,
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Names of the stages in the order they run.
    pub fn stage_order(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage over `cars`, keeping the survivors in input order.
    pub fn evaluate(&self, cars: Vec<Car>, criteria: &Criteria) -> Vec<Car> {
        if cars.is_empty() {
            return cars;
        }

        self.stages.iter().fold(cars, |candidates, stage| {
            let before = candidates.len();
            let kept = stage.apply(candidates, criteria);
            debug!(stage = stage.name(), before, after = kept.len(), "filter stage");
            kept
        })
    }

    /// True when `car` passes every stage.
    pub fn accepts(&self, car: &Car, criteria: &Criteria) -> bool {
        self.stages.iter().all(|stage| stage.matches(car, criteria))
    }
}
