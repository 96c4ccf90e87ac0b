//! StreamElements REST API client library.
//!
//! Provides a single authenticated request executor and a route table
//! covering the StreamElements `kappa/v2` API, with one thin method per
//! remote operation.

pub mod api;
pub mod config;

pub use api::{
    HttpMethod, Payload, RedemptionFilter, RequestDescriptor, Route, StreamElementsClient,
};
pub use config::{ClientConfig, DEFAULT_BASE};

/// Unified error type for the streamelements-client crate.
#[derive(Debug, thiserror::Error)]
pub enum StreamElementsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("StreamElements API error: {}", display_api_error(.0))]
    Api(serde_json::Value),

    #[error("Error encountered during request to StreamElements. Status Code: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("No channel given and no default account id configured")]
    MissingChannel,

    #[error("Missing value for path parameter `{0}`")]
    MissingPathParam(&'static str),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),
}

/// API errors are usually plain strings; anything else is shown as JSON.
fn display_api_error(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
