// src/domain/criteria.rs

use crate::domain::community::Home;
use crate::domain::groups::ALL_GROUPS;
use serde::Serialize;

pub const DEFAULT_PRICE_MAX: f64 = 1_000_000.0;
pub const DEFAULT_AREA_MAX: f64 = 5_000.0;

/// Inclusive interval `[min, max]`.
///
/// Ordering is not enforced here: an inverted interval simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeBounds {
    pub min: f64,
    pub max: f64,
}

impl RangeBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Session filter criteria. Replaced wholesale on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Catalog-level group restriction, empty for all groups.
    pub group: String,
    /// Exact home type, empty for any type.
    pub home_type: String,
    pub price: RangeBounds,
    pub area: RangeBounds,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::with_limits(DEFAULT_PRICE_MAX, DEFAULT_AREA_MAX)
    }
}

impl FilterCriteria {
    /// "No restriction" criteria whose numeric ranges span `[0, max]`.
    pub fn with_limits(price_max: f64, area_max: f64) -> Self {
        Self {
            group: ALL_GROUPS.to_string(),
            home_type: String::new(),
            price: RangeBounds::new(0.0, price_max),
            area: RangeBounds::new(0.0, area_max),
        }
    }

    pub fn with_group(&self, group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            ..self.clone()
        }
    }

    pub fn with_home_type(&self, home_type: impl Into<String>) -> Self {
        Self {
            home_type: home_type.into(),
            ..self.clone()
        }
    }

    pub fn with_price(&self, min: f64, max: f64) -> Self {
        Self {
            price: RangeBounds::new(min, max),
            ..self.clone()
        }
    }

    pub fn with_area(&self, min: f64, max: f64) -> Self {
        Self {
            area: RangeBounds::new(min, max),
            ..self.clone()
        }
    }

    /// Type, price and area must all hold. The group is applied upstream by
    /// the join and plays no part here.
    pub fn matches(&self, home: &Home) -> bool {
        (self.home_type.is_empty() || home.home_type == self.home_type)
            && self.price.contains(home.price)
            && self.area.contains(home.area)
    }
}

/// Homes satisfying every criterion, in input order.
pub fn filter_homes<'a>(homes: &'a [Home], criteria: &FilterCriteria) -> Vec<&'a Home> {
    homes.iter().filter(|h| criteria.matches(h)).collect()
}
