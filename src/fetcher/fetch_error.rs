use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {0}: {1}")]
    Status(u16, String),
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
