use serde::Serialize;

use super::request::query_pairs;
use super::routes::{self, Payload, Route};
use super::*;

impl StreamElementsClient {
    /// Channel to use for a call: the explicit one, else the configured
    /// account id.
    pub fn resolve_channel<'a>(&'a self, channel: Option<&'a str>) -> Option<&'a str> {
        channel.or(self.config.account_id.as_deref())
    }

    /// Render a route into a request without sending it.
    ///
    /// `payload` is attached according to the route's [`Payload`] kind and
    /// ignored for routes that carry none.
    pub fn describe(
        &self,
        route: &Route,
        channel: Option<&str>,
        params: &[(&str, &str)],
        payload: Option<Value>,
    ) -> Result<RequestDescriptor, StreamElementsError> {
        let path = route.render(self.resolve_channel(channel), params)?;
        let request = RequestDescriptor::new(route.method, path);

        Ok(match (route.payload, payload) {
            (Payload::Body, Some(body)) => request.with_body(body),
            (Payload::Query, Some(query)) => request.with_query(query_pairs(&query)?),
            (Payload::None, Some(_)) => {
                tracing::debug!(route = route.name, "Ignoring payload for route without one");
                request
            }
            (_, None) => request,
        })
    }

    /// Render and send a route.
    pub async fn dispatch(
        &self,
        route: &Route,
        channel: Option<&str>,
        params: &[(&str, &str)],
        payload: Option<Value>,
    ) -> Result<Value, StreamElementsError> {
        let request = self.describe(route, channel, params, payload)?;
        self.execute(request).await
    }

    /// Look up an operation by name in the route table and send it.
    pub async fn call(
        &self,
        operation: &str,
        channel: Option<&str>,
        params: &[(&str, &str)],
        payload: Option<Value>,
    ) -> Result<Value, StreamElementsError> {
        let route = routes::find(operation)
            .ok_or_else(|| StreamElementsError::UnknownOperation(operation.to_string()))?;
        self.dispatch(route, channel, params, payload).await
    }
}

/// Serialize caller options into a JSON payload.
pub(super) fn to_payload(options: &impl Serialize) -> Result<Option<Value>, StreamElementsError> {
    Ok(Some(serde_json::to_value(options)?))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn client(account_id: Option<&str>) -> StreamElementsClient {
        let mut config = ClientConfig::new("jwt").with_base("https://se.test/kappa/v2");
        config.account_id = account_id.map(str::to_string);
        StreamElementsClient::new(config).unwrap()
    }

    #[test]
    fn describe_falls_back_to_account_id() {
        let req = client(Some("acct"))
            .describe(&routes::GET_BOT_STATUS, None, &[], None)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "bot/acct");
    }

    #[test]
    fn explicit_channel_overrides_account_id() {
        let req = client(Some("acct"))
            .describe(&routes::GET_BOT_STATUS, Some("other"), &[], None)
            .unwrap();
        assert_eq!(req.path, "bot/other");
    }

    #[test]
    fn describe_without_any_channel_fails() {
        let err = client(None)
            .describe(&routes::GET_BOT_STATUS, None, &[], None)
            .unwrap_err();
        assert!(matches!(err, StreamElementsError::MissingChannel));
    }

    #[test]
    fn query_routes_get_query_and_no_body() {
        let req = client(Some("acct"))
            .describe(
                &routes::GET_TOP_POINTS_USERS,
                None,
                &[],
                Some(json!({ "limit": 10, "offset": 0 })),
            )
            .unwrap();
        assert_eq!(req.path, "points/acct/top");
        assert!(req.body.is_none());
        assert_eq!(
            req.query,
            Some(vec![
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "0".to_string()),
            ])
        );
    }

    #[test]
    fn body_routes_carry_payload() {
        let req = client(Some("acct"))
            .describe(&routes::BOT_SAY, None, &[], Some(json!({ "message": "hi" })))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body, Some(json!({ "message": "hi" })));
        assert!(req.query.is_none());
    }

    #[test]
    fn payload_is_dropped_for_routes_without_one() {
        let req = client(Some("acct"))
            .describe(&routes::BOT_MUTE, None, &[], Some(json!({ "x": 1 })))
            .unwrap();
        assert!(req.body.is_none());
        assert!(req.query.is_none());
    }

    #[tokio::test]
    async fn call_rejects_unknown_operation() {
        let err = client(Some("acct"))
            .call("summon_dragon", None, &[], None)
            .await
            .unwrap_err();
        assert!(matches!(err, StreamElementsError::UnknownOperation(name) if name == "summon_dragon"));
    }
}
