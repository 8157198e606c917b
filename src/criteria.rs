//! Criteria - the sparse set of constraints for one lookup.
//!
//! Every field is optional; `None` means the field is unconstrained. An
//! empty string constraint is also unconstrained. Any other string is
//! trimmed before comparison, so a whitespace-only value matches `""`.
//!
//! ```ignore
//! use car_advisor::{Criteria, PriceBand};
//!
//! let criteria = Criteria::new()
//!     .with_body_type("Седан")
//!     .with_price_band(PriceBand::From1To2M);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub brand: Option<String>,
    pub body_type: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_power: Option<u32>,
    pub max_power: Option<u32>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from loosely-typed key/value pairs.
    ///
    /// Recognized keys are `brand`, `body_type`, `min_price`, `max_price`,
    /// `min_power` and `max_power`. Anything else is ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = Self::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "brand" => criteria.brand = Some(value.to_string()),
                "body_type" => criteria.body_type = Some(value.to_string()),
                "min_price" => criteria.min_price = Some(parse_number(key, value)?),
                "max_price" => criteria.max_price = Some(parse_number(key, value)?),
                "min_power" => criteria.min_power = Some(parse_number(key, value)?),
                "max_power" => criteria.max_power = Some(parse_number(key, value)?),
                _ => {}
            }
        }
        Ok(criteria)
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_body_type(mut self, body_type: impl Into<String>) -> Self {
        self.body_type = Some(body_type.into());
        self
    }

    pub fn with_min_price(mut self, min: u64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn with_max_price(mut self, max: u64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn with_price_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_min_power(mut self, min: u32) -> Self {
        self.min_power = Some(min);
        self
    }

    pub fn with_max_power(mut self, max: u32) -> Self {
        self.max_power = Some(max);
        self
    }

    pub fn with_power_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_power = min;
        self.max_power = max;
        self
    }

    pub fn with_price_band(self, band: PriceBand) -> Self {
        let (min, max) = band.bounds();
        self.with_price_range(min, max)
    }

    pub fn with_power_band(self, band: PowerBand) -> Self {
        let (min, max) = band.bounds();
        self.with_power_range(min, max)
    }

    /// The brand constraint, trimmed. `None` when absent or empty.
    pub fn brand_filter(&self) -> Option<&str> {
        text_filter(self.brand.as_deref())
    }

    /// The body type constraint, trimmed. `None` when absent or empty.
    pub fn body_type_filter(&self) -> Option<&str> {
        text_filter(self.body_type.as_deref())
    }

    /// True when no field is constrained.
    pub fn is_empty(&self) -> bool {
        self.brand_filter().is_none()
            && self.body_type_filter().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_power.is_none()
            && self.max_power.is_none()
    }

    /// Reject ranges whose minimum exceeds their maximum.
    ///
    /// Filtering never validates; an inverted range simply matches nothing.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(CriteriaError::InvertedRange {
                    field: "price",
                    min,
                    max,
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min_power, self.max_power) {
            if min > max {
                return Err(CriteriaError::InvertedRange {
                    field: "power",
                    min: u64::from(min),
                    max: u64::from(max),
                });
            }
        }
        Ok(())
    }
}

/// Only an empty string is skipped; the trim happens after that check.
fn text_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty()).map(str::trim)
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, CriteriaError> {
    value
        .trim()
        .parse()
        .map_err(|_| CriteriaError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Named price ranges offered to the user. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBand {
    Any,
    UpTo1M,
    From1To2M,
    From2To3M,
    From3To5M,
    From5To10M,
    Over10M,
}

impl PriceBand {
    pub const ALL: [PriceBand; 7] = [
        PriceBand::Any,
        PriceBand::UpTo1M,
        PriceBand::From1To2M,
        PriceBand::From2To3M,
        PriceBand::From3To5M,
        PriceBand::From5To10M,
        PriceBand::Over10M,
    ];

    pub fn bounds(self) -> (Option<u64>, Option<u64>) {
        const M: u64 = 1_000_000;
        match self {
            PriceBand::Any => (None, None),
            PriceBand::UpTo1M => (None, Some(M)),
            PriceBand::From1To2M => (Some(M), Some(2 * M)),
            PriceBand::From2To3M => (Some(2 * M), Some(3 * M)),
            PriceBand::From3To5M => (Some(3 * M), Some(5 * M)),
            PriceBand::From5To10M => (Some(5 * M), Some(10 * M)),
            PriceBand::Over10M => (Some(10 * M), None),
        }
    }

    /// Short token accepted by `FromStr`.
    pub fn token(self) -> &'static str {
        match self {
            PriceBand::Any => "any",
            PriceBand::UpTo1M => "1m",
            PriceBand::From1To2M => "1-2m",
            PriceBand::From2To3M => "2-3m",
            PriceBand::From3To5M => "3-5m",
            PriceBand::From5To10M => "5-10m",
            PriceBand::Over10M => "10m+",
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PriceBand {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PriceBand::ALL
            .into_iter()
            .find(|band| band.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| CriteriaError::UnknownPreset {
                kind: "price",
                value: s.to_string(),
            })
    }
}

/// Named power ranges offered to the user. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerBand {
    Any,
    UpTo100,
    From100To150,
    From150To200,
    From200To300,
    Over300,
}

impl PowerBand {
    pub const ALL: [PowerBand; 6] = [
        PowerBand::Any,
        PowerBand::UpTo100,
        PowerBand::From100To150,
        PowerBand::From150To200,
        PowerBand::From200To300,
        PowerBand::Over300,
    ];

    pub fn bounds(self) -> (Option<u32>, Option<u32>) {
        match self {
            PowerBand::Any => (None, None),
            PowerBand::UpTo100 => (None, Some(100)),
            PowerBand::From100To150 => (Some(100), Some(150)),
            PowerBand::From150To200 => (Some(150), Some(200)),
            PowerBand::From200To300 => (Some(200), Some(300)),
            PowerBand::Over300 => (Some(300), None),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            PowerBand::Any => "any",
            PowerBand::UpTo100 => "100",
            PowerBand::From100To150 => "100-150",
            PowerBand::From150To200 => "150-200",
            PowerBand::From200To300 => "200-300",
            PowerBand::Over300 => "300+",
        }
    }
}

impl fmt::Display for PowerBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PowerBand {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PowerBand::ALL
            .into_iter()
            .find(|band| band.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| CriteriaError::UnknownPreset {
                kind: "power",
                value: s.to_string(),
            })
    }
}
