mod fetch_error;
mod http;
mod tasks;

use crate::domain::{Community, Home};

pub use fetch_error::FetchError;
pub use http::HttpCatalogSource;
pub use tasks::spawn_fetches;

/// Read-only access to the two source collections.
pub trait CatalogSource: Send + Sync {
    fn fetch_communities(&self) -> Result<Vec<Community>, FetchError>;
    fn fetch_homes(&self) -> Result<Vec<Home>, FetchError>;
}
