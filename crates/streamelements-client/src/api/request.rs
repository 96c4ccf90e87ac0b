use std::fmt;

use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::*;

/// HTTP verbs used by the StreamElements API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single call described as plain data.
///
/// `path` is relative to the configured base and already has every
/// placeholder substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub query: Option<Vec<(String, String)>>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = Some(query);
        self
    }
}

impl StreamElementsClient {
    /// Create a client with a fresh connection pool.
    pub fn new(config: ClientConfig) -> Result<Self, StreamElementsError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client on top of a caller-configured `reqwest::Client`
    /// (proxies, timeouts, TLS roots, ...).
    pub fn with_http_client(
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self, StreamElementsError> {
        validate(&config)?;
        let base = config.base.trim_end_matches('/').to_string();
        Ok(Self { http, config, base })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for a relative resource path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Send one authenticated request and classify the outcome.
    ///
    /// Transport failures win over everything else, then a truthy `error`
    /// field in the body, then any status other than 200.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<Value, StreamElementsError> {
        let url = self.url_for(&request.path);
        let method = request.method;
        tracing::debug!(%method, path = %request.path, "StreamElements request");

        let mut builder = self
            .http
            .request(method.to_reqwest(), &url)
            .bearer_auth(&self.config.token)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(%method, url = %url, error = %e, "StreamElements transport failure");
                return Err(e.into());
            }
        };

        let status = resp.status().as_u16();
        let bytes = resp.bytes().await?;

        decode_response(status, &bytes).inspect_err(|e| {
            tracing::warn!(%method, url = %url, status, error = %e, "StreamElements request failed");
        })
    }

    /// Like [`execute`](Self::execute), then deserialize the payload into `T`.
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<T, StreamElementsError> {
        let value = self.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Classify a received response into the payload or an error.
///
/// An `error` field takes priority over the status code, so a 200 carrying
/// one still fails with that field's value.
pub fn decode_response(status: u16, body: &[u8]) -> Result<Value, StreamElementsError> {
    let payload = decode_body(body);

    if let Some(error) = payload.get("error").filter(|e| is_truthy(e)) {
        return Err(StreamElementsError::Api(error.clone()));
    }

    if status != 200 {
        return Err(StreamElementsError::UnexpectedStatus { status });
    }

    Ok(payload)
}

/// Empty bodies decode to `null`; bodies that are not JSON are kept as text.
fn decode_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// JavaScript truthiness, which is what the API's error convention relies on.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Flatten a JSON object of scalars into query pairs. `null` entries are
/// dropped, mirroring how unset options are omitted from the query string.
pub fn query_pairs(value: &Value) -> Result<Vec<(String, String)>, StreamElementsError> {
    let Value::Object(map) = value else {
        return Err(StreamElementsError::InvalidQuery(format!(
            "expected an object, got {value}"
        )));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rendered = match value {
            Value::Null => continue,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Array(_) | Value::Object(_) => {
                return Err(StreamElementsError::InvalidQuery(format!(
                    "`{key}` is not a scalar"
                )));
            }
        };
        pairs.push((key.clone(), rendered));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_status_returns_body_unchanged() {
        let body = json!({ "items": [1, 2, { "name": "x" }], "total": 3 });
        let bytes = serde_json::to_vec(&body).unwrap();
        assert_eq!(decode_response(200, &bytes).unwrap(), body);
    }

    #[test]
    fn error_field_wins_even_on_200() {
        let err = decode_response(200, br#"{"error":"Bad Token","data":[1]}"#).unwrap_err();
        match err {
            StreamElementsError::Api(value) => assert_eq!(value, json!("Bad Token")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_field_wins_over_status() {
        let err = decode_response(404, br#"{"error":{"code":404}}"#).unwrap_err();
        match err {
            StreamElementsError::Api(value) => assert_eq!(value, json!({ "code": 404 })),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn falsy_error_field_is_ignored() {
        for body in [
            r#"{"error":null}"#,
            r#"{"error":false}"#,
            r#"{"error":0}"#,
            r#"{"error":""}"#,
        ] {
            let value = decode_response(200, body.as_bytes()).unwrap();
            assert!(value.get("error").is_some(), "{body}");
        }
    }

    #[test]
    fn non_200_without_error_reports_status() {
        let err = decode_response(201, br#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, StreamElementsError::UnexpectedStatus { status: 201 }));
        assert!(err.to_string().contains("201"));

        let err = decode_response(500, b"Internal Server Error").unwrap_err();
        assert!(matches!(err, StreamElementsError::UnexpectedStatus { status: 500 }));
    }

    #[test]
    fn empty_and_plain_text_bodies() {
        assert_eq!(decode_response(200, b"").unwrap(), Value::Null);
        assert_eq!(decode_response(200, b"OK").unwrap(), json!("OK"));
    }

    #[test]
    fn query_pairs_render_scalars_and_skip_nulls() {
        let pairs = query_pairs(&json!({
            "limit": 10,
            "offset": 0,
            "pending": true,
            "voice": "Joanna",
            "skip": null,
        }))
        .unwrap();
        assert_eq!(
            pairs,
            vec![
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("pending".to_string(), "true".to_string()),
                ("voice".to_string(), "Joanna".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_reject_nested_values() {
        assert!(matches!(
            query_pairs(&json!({ "filter": { "a": 1 } })),
            Err(StreamElementsError::InvalidQuery(_))
        ));
        assert!(matches!(
            query_pairs(&json!([1, 2])),
            Err(StreamElementsError::InvalidQuery(_))
        ));
    }

    #[test]
    fn url_for_joins_with_single_slash() {
        for base in ["https://api.example.com/kappa/v2", "https://api.example.com/kappa/v2/"] {
            let client =
                StreamElementsClient::new(ClientConfig::new("jwt").with_base(base)).unwrap();
            assert_eq!(
                client.url_for("bot/chan1"),
                "https://api.example.com/kappa/v2/bot/chan1"
            );
        }
    }
}
