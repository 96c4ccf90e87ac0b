//! Client configuration: API root, bearer token and default channel.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::StreamElementsError;

/// Production root of the StreamElements API.
pub const DEFAULT_BASE: &str = "https://api.streamelements.com/kappa/v2";

/// Immutable configuration shared by every call made through a client.
///
/// Deserializes from `{ "base": ..., "token": ..., "accountId": ... }`;
/// `base` may be omitted to target production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default = "default_base")]
    pub base: String,
    pub token: String,
    #[serde(default)]
    pub account_id: Option<String>,
}

fn default_base() -> String {
    DEFAULT_BASE.to_string()
}

impl ClientConfig {
    /// Config against the production API with no default channel.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base: default_base(),
            token: token.into(),
            account_id: None,
        }
    }

    /// Set the channel used when an operation is called without one.
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Point the client at a different API root (staging, mock server, ...).
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }
}

/// Check a config before it is used to build a client.
pub fn validate(config: &ClientConfig) -> Result<(), StreamElementsError> {
    if config.token.trim().is_empty() {
        return Err(StreamElementsError::InvalidConfig(
            "token must not be empty".into(),
        ));
    }

    let url = Url::parse(&config.base)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(StreamElementsError::InvalidConfig(format!(
            "base must be an http(s) URL, got scheme '{}'",
            url.scheme()
        )));
    }
    if url.cannot_be_a_base() {
        return Err(StreamElementsError::InvalidConfig(format!(
            "base '{}' cannot be used as a URL root",
            config.base
        )));
    }

    if config
        .account_id
        .as_deref()
        .is_some_and(|id| id.trim().is_empty())
    {
        return Err(StreamElementsError::InvalidConfig(
            "accountId must not be blank when set".into(),
        ));
    }

    Ok(())
}
