//! Stage - one predicate of the filter pipeline.

use std::fmt;

use crate::car::Car;
use crate::criteria::Criteria;

/// A single filter keyed to one field or field pair.
///
/// Stages are independent: each looks only at the candidate and the
/// criteria, never at what another stage did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    BodyType,
    Price,
    Brand,
    Power,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::BodyType => "body_type",
            Stage::Price => "price",
            Stage::Brand => "brand",
            Stage::Power => "power",
        }
    }

    /// True when the stage has nothing to filter on.
    pub fn is_unconstrained(self, criteria: &Criteria) -> bool {
        match self {
            Stage::BodyType => criteria.body_type_filter().is_none(),
            Stage::Price => criteria.min_price.is_none() && criteria.max_price.is_none(),
            Stage::Brand => criteria.brand_filter().is_none(),
            Stage::Power => criteria.min_power.is_none() && criteria.max_power.is_none(),
        }
    }

    pub fn matches(self, car: &Car, criteria: &Criteria) -> bool {
        match self {
            Stage::BodyType => equals(&car.body_type, criteria.body_type_filter()),
            Stage::Price => within(car.price, criteria.min_price, criteria.max_price),
            Stage::Brand => equals(&car.brand, criteria.brand_filter()),
            Stage::Power => within(car.power, criteria.min_power, criteria.max_power),
        }
    }

    /// Keep the candidates this stage accepts, in their original order.
    pub fn apply(self, mut cars: Vec<Car>, criteria: &Criteria) -> Vec<Car> {
        if self.is_unconstrained(criteria) {
            return cars;
        }
        cars.retain(|car| self.matches(car, criteria));
        cars
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn equals(value: &str, wanted: Option<&str>) -> bool {
    wanted.is_none_or(|wanted| value == wanted)
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}
