// config.rs
use crate::domain::criteria::{DEFAULT_AREA_MAX, DEFAULT_PRICE_MAX};
use crate::domain::FilterCriteria;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://storage.googleapis.com/openhouse-ai-fe-coding-test/";
pub const DEFAULT_FALLBACK_IMAGE: &str = "/imgcomingsoon.jpg";

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding `communities.json` and `homes.json`.
    pub api_base: String,
    /// Shown for communities whose image is missing or fails to load.
    pub fallback_image: String,
    pub http_timeout: Duration,
    pub max_workers: usize,
    /// Upper end of the full price range (the default price criterion).
    pub price_max: f64,
    /// Upper end of the full area range (the default area criterion).
    pub area_max: f64,
    pub log_json: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            api_base: DEFAULT_API_BASE.to_string(),
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
            http_timeout: Duration::from_secs(30),
            max_workers: 8,
            price_max: DEFAULT_PRICE_MAX,
            area_max: DEFAULT_AREA_MAX,
            log_json: false,
        }
    }
}

impl CatalogConfig {
    /// Reads `CATALOG_*` variables; anything unset or unparsable keeps its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: parse_var(&lookup, "CATALOG_BIND_ADDR").unwrap_or(defaults.bind_addr),
            api_base: lookup("CATALOG_API_BASE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_base),
            fallback_image: lookup("CATALOG_FALLBACK_IMAGE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.fallback_image),
            http_timeout: parse_var(&lookup, "CATALOG_HTTP_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            max_workers: parse_var(&lookup, "CATALOG_MAX_WORKERS")
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.max_workers),
            price_max: parse_var(&lookup, "CATALOG_PRICE_MAX")
                .filter(|v: &f64| v.is_finite() && *v >= 0.0)
                .unwrap_or(defaults.price_max),
            area_max: parse_var(&lookup, "CATALOG_AREA_MAX")
                .filter(|v: &f64| v.is_finite() && *v >= 0.0)
                .unwrap_or(defaults.area_max),
            log_json: lookup("CATALOG_LOG_JSON")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.log_json),
        }
    }

    /// Criteria a new session starts with.
    pub fn initial_criteria(&self) -> FilterCriteria {
        FilterCriteria::with_limits(self.price_max, self.area_max)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    lookup(name).and_then(|v| v.trim().parse().ok())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
