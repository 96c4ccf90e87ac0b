//! StreamElements REST API client.
//!
//! A single executor (`request`) sends every call with Bearer auth and
//! classifies the outcome. `routes` holds the catalog of remote operations
//! as data; `dispatch` renders a route into a request. The remaining
//! modules add one thin typed method per operation, grouped by resource.

mod activities;
mod bot;
mod channels;
mod contests;
mod dispatch;
mod giveaways;
mod loyalty;
mod overlays;
mod points;
mod request;
mod sessions;
mod songrequest;
mod speech;
mod store;
mod streams;
mod themes;
mod tipping;
mod uploads;

pub mod routes;

#[cfg(test)]
mod tests;

pub use request::{HttpMethod, RequestDescriptor, decode_response, query_pairs};
pub use routes::{Payload, Route};
pub use speech::DEFAULT_VOICE;
pub use store::RedemptionFilter;

use serde_json::Value;

use crate::StreamElementsError;
use crate::config::{ClientConfig, validate};

/// StreamElements API client bound to one token and default channel.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct StreamElementsClient {
    pub(super) http: reqwest::Client,
    pub(super) config: ClientConfig,
    pub(super) base: String,
}
