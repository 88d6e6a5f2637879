// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from the server logic (routing, bad query input, etc.).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Serialization Error: {0}")]
    Serialization(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Conditions the catalog surfaces to the presentation layer.
///
/// None of these abort the session: fetch failures leave the affected
/// collection empty, the other two are resolved where they are observed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Error fetching communities: {0}")]
    CommunityFetchFailed(String),
    #[error("Error fetching homes: {0}")]
    HomeFetchFailed(String),
    #[error("Image unavailable for community {0}")]
    ImageUnavailable(String),
    #[error("Community {0} is not in the current catalog")]
    SelectionUnresolved(String),
}
