// fetcher/http.rs
use crate::config::CatalogConfig;
use crate::domain::{Community, Home};
use crate::fetcher::{CatalogSource, FetchError};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, info};
use url::Url;

const USER_AGENT: &str = concat!("community_catalog/", env!("CARGO_PKG_VERSION"));

pub const COMMUNITIES_PATH: &str = "communities.json";
pub const HOMES_PATH: &str = "homes.json";

/// Reads both collections from a static JSON host.
pub struct HttpCatalogSource {
    client: Client,
    communities_url: Url,
    homes_url: Url,
}

impl HttpCatalogSource {
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let base = Url::parse(&config.api_base)
            .map_err(|e| FetchError::Config(format!("invalid api base {}: {e}", config.api_base)))?;

        Ok(Self {
            client,
            communities_url: endpoint(&base, COMMUNITIES_PATH)?,
            homes_url: endpoint(&base, HOMES_PATH)?,
        })
    }

    pub fn communities_url(&self) -> &Url {
        &self.communities_url
    }

    pub fn homes_url(&self) -> &Url {
        &self.homes_url
    }

    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<Vec<T>, FetchError> {
        let start = Instant::now();
        debug!(%url, "fetching collection");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16(), text));
        }

        let items: Vec<T> =
            serde_json::from_str(&text).map_err(|e| FetchError::JsonParse(e.to_string()))?;

        info!(%url, count = items.len(), elapsed = ?start.elapsed(), "collection fetched");
        Ok(items)
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_communities(&self) -> Result<Vec<Community>, FetchError> {
        self.get_json(&self.communities_url)
    }

    fn fetch_homes(&self) -> Result<Vec<Home>, FetchError> {
        self.get_json(&self.homes_url)
    }
}

/// Joins `path` onto `base`, treating `base` as a directory even without a
/// trailing slash.
fn endpoint(base: &Url, path: &str) -> Result<Url, FetchError> {
    let mut dir = base.clone();
    if !dir.path().ends_with('/') {
        let with_slash = format!("{}/", dir.path());
        dir.set_path(&with_slash);
    }
    dir.join(path)
        .map_err(|e| FetchError::Config(format!("invalid endpoint {path}: {e}")))
}
