// src/domain/community.rs

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Home types offered by the detail view's type select.
/// Filtering treats `Home::home_type` as an opaque string, this list is never
/// used to validate incoming data.
pub const HOME_TYPES: [&str; 4] = ["House", "Townhome", "Condo", "Duplex"];

/// A community record as served by `communities.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub img_url: String,
    pub group: String,
}

/// A home record as served by `homes.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    pub id: String,
    /// Foreign key into the community collection.
    pub community_id: String,
    #[serde(rename = "type")]
    pub home_type: String,
    pub price: f64,
    pub area: f64,
}

/// Mean price of a community's homes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AveragePrice {
    Available(f64),
    Unavailable,
}

impl fmt::Display for AveragePrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AveragePrice::Available(mean) => {
                // `{:.2}` alone rounds ties to even; cents round half up.
                let cents = (mean * 100.0).round() / 100.0;
                write!(f, "${cents:.2}")
            }
            AveragePrice::Unavailable => write!(f, "N/A"),
        }
    }
}

impl Serialize for AveragePrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A community joined with its homes and their average price.
///
/// Derived data: it is rebuilt from the source collections every time one of
/// them (or the group restriction) changes and is never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedCommunity {
    #[serde(flatten)]
    pub community: Community,
    pub homes: Vec<Home>,
    #[serde(rename = "avgPrice")]
    pub average_price: AveragePrice,
}

impl EnrichedCommunity {
    pub fn id(&self) -> &str {
        &self.community.id
    }

    pub fn has_homes(&self) -> bool {
        !self.homes.is_empty()
    }
}
