use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use serde_json::json;
use tokio::net::TcpListener;

use super::*;

/// A request as seen by the mock API.
#[derive(Debug, Clone)]
struct Captured {
    method: String,
    uri: String,
    authorization: Option<String>,
    body: Option<Value>,
}

#[derive(Clone)]
struct MockApi {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

async fn record(
    State(api): State<MockApi>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let captured = Captured {
        method: method.to_string(),
        uri: uri.to_string(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: (!body.is_empty()).then(|| serde_json::from_slice(&body).unwrap()),
    };
    api.captured.lock().unwrap().push(captured);
    (
        api.status,
        [(header::CONTENT_TYPE, "application/json")],
        api.body.clone(),
    )
}

/// Start a mock API answering every request with `status` and `body`.
/// Returns the base URL to configure and the request log.
async fn mock_api(status: u16, body: &str) -> (String, Arc<Mutex<Vec<Captured>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let api = MockApi {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
        captured: captured.clone(),
    };
    let app = Router::new().fallback(record).with_state(api);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/kappa/v2"), captured)
}

fn local_client(config: ClientConfig) -> StreamElementsClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    StreamElementsClient::with_http_client(config, http).unwrap()
}

fn client_for(base: &str) -> StreamElementsClient {
    local_client(
        ClientConfig::new("jwt-token")
            .with_base(base)
            .with_account_id("acct1"),
    )
}

fn only_request(captured: &Arc<Mutex<Vec<Captured>>>) -> Captured {
    let log = captured.lock().unwrap();
    assert_eq!(log.len(), 1, "expected exactly one request, got {log:?}");
    log[0].clone()
}

#[tokio::test]
async fn success_resolves_with_body_and_sends_bearer() {
    let payload = json!({ "_id": "acct1", "username": "streamer", "tags": ["a", "b"] });
    let (base, captured) = mock_api(200, &payload.to_string()).await;

    let value = client_for(&base).get_channel(None).await.unwrap();
    assert_eq!(value, payload);

    let req = only_request(&captured);
    assert_eq!(req.method, "GET");
    assert_eq!(req.uri, "/kappa/v2/channels/acct1");
    assert_eq!(req.authorization.as_deref(), Some("Bearer jwt-token"));
    assert!(req.body.is_none());
}

#[tokio::test]
async fn trailing_slash_base_does_not_double_slash() {
    let (base, captured) = mock_api(200, "{}").await;

    client_for(&format!("{base}/")).get_bot_status(None).await.unwrap();
    assert_eq!(only_request(&captured).uri, "/kappa/v2/bot/acct1");
}

#[tokio::test]
async fn explicit_channel_overrides_default() {
    let (base, captured) = mock_api(200, "{}").await;

    client_for(&base)
        .get_tip("tip42", Some("other"))
        .await
        .unwrap();
    assert_eq!(only_request(&captured).uri, "/kappa/v2/tips/other/tip42");
}

#[tokio::test]
async fn error_field_rejects_on_200() {
    let (base, _captured) = mock_api(200, r#"{"error":"Unauthorized","items":[]}"#).await;

    let err = client_for(&base).get_logs(None).await.unwrap_err();
    match err {
        StreamElementsError::Api(value) => assert_eq!(value, json!("Unauthorized")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_200_rejects_with_status() {
    let (base, _captured) = mock_api(502, r#"{"message":"bad gateway"}"#).await;

    let err = client_for(&base).get_streams(None).await.unwrap_err();
    assert!(matches!(err, StreamElementsError::UnexpectedStatus { status: 502 }));
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn transport_failure_rejects_with_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{addr}"))
        .get_current_user()
        .await
        .unwrap_err();
    assert!(matches!(err, StreamElementsError::Http(_)), "{err:?}");
}

#[tokio::test]
async fn top_points_users_sends_query_without_body() {
    let (base, captured) = mock_api(200, r#"{"users":[]}"#).await;

    client_for(&base).get_top_points_users(10, 0, None).await.unwrap();

    let req = only_request(&captured);
    assert_eq!(req.method, "GET");
    assert_eq!(req.uri, "/kappa/v2/points/acct1/top?limit=10&offset=0");
    assert!(req.body.is_none());
}

#[tokio::test]
async fn add_points_ignores_sign_and_remove_negates() {
    let (base, captured) = mock_api(200, "{}").await;
    let client = client_for(&base);

    client.add_user_points("viewer", -5, None).await.unwrap();
    client.add_user_points("viewer", 5, None).await.unwrap();
    client.remove_user_points("viewer", 5, None).await.unwrap();

    let log = captured.lock().unwrap();
    let uris: Vec<&str> = log.iter().map(|r| r.uri.as_str()).collect();
    assert_eq!(
        uris,
        vec![
            "/kappa/v2/points/acct1/viewer/5",
            "/kappa/v2/points/acct1/viewer/5",
            "/kappa/v2/points/acct1/viewer/-5",
        ]
    );
    assert!(log.iter().all(|r| r.method == "PUT" && r.body.is_none()));
}

#[tokio::test]
async fn bot_say_sends_json_body() {
    let (base, captured) = mock_api(200, "{}").await;

    client_for(&base).bot_say("hello chat", None).await.unwrap();

    let req = only_request(&captured);
    assert_eq!(req.method, "POST");
    assert_eq!(req.uri, "/kappa/v2/bot/acct1/say");
    assert_eq!(req.body, Some(json!({ "message": "hello chat" })));
}

#[tokio::test]
async fn options_are_forwarded_as_body() {
    let (base, captured) = mock_api(200, "{}").await;
    let client = client_for(&base);
    let options = json!({ "title": "Big giveaway", "maxTickets": 10 });

    client.create_giveaway(&options, None).await.unwrap();
    client.update_loyalty_settings(&options, None).await.unwrap();
    client.update_store_item("item7", &options, None).await.unwrap();

    let log = captured.lock().unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log[0].uri, "/kappa/v2/giveaways/acct1");
    assert_eq!(log[1].uri, "/kappa/v2/loyalty/acct1");
    assert_eq!(log[2].uri, "/kappa/v2/store/acct1/items/item7");
    assert!(log.iter().all(|r| r.body.as_ref() == Some(&options)));
}

#[tokio::test]
async fn delete_bot_command_targets_given_command() {
    let (base, captured) = mock_api(200, "{}").await;

    client_for(&base).delete_bot_command("cmd9", None).await.unwrap();

    let req = only_request(&captured);
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.uri, "/kappa/v2/bot/commands/acct1/cmd9");
}

#[tokio::test]
async fn delete_bot_user_level_keeps_levels_body() {
    let (base, captured) = mock_api(200, "{}").await;

    client_for(&base).delete_bot_user_level("mod_user", None).await.unwrap();

    let req = only_request(&captured);
    assert_eq!(req.uri, "/kappa/v2/bot/acct1/levels/mod_user");
    assert_eq!(req.body, Some(json!({ "id": "levels" })));
}

#[tokio::test]
async fn generate_speech_defaults_voice() {
    let (base, captured) = mock_api(200, "{}").await;

    client_for(&base).generate_speech("hi", None).await.unwrap();

    let req = only_request(&captured);
    assert_eq!(req.uri, "/kappa/v2/speech?text=hi&voice=Joanna");
    assert!(req.body.is_none());
}

#[tokio::test]
async fn redemption_filter_omits_unset_fields() {
    let (base, captured) = mock_api(200, "{}").await;
    let filter = RedemptionFilter {
        limit: Some(25),
        pending: Some(true),
        ..Default::default()
    };

    client_for(&base).get_store_redemptions(&filter, None).await.unwrap();

    assert_eq!(
        only_request(&captured).uri,
        "/kappa/v2/store/acct1/redemptions?limit=25&pending=true"
    );
}

#[tokio::test]
async fn call_by_operation_name() {
    let (base, captured) = mock_api(200, r#"{"rank":3}"#).await;

    let value = client_for(&base)
        .call("get_user_rank", Some("chanX"), &[("user_id", "viewer")], None)
        .await
        .unwrap();
    assert_eq!(value, json!({ "rank": 3 }));
    assert_eq!(only_request(&captured).uri, "/kappa/v2/points/chanX/viewer/rank");
}

#[tokio::test]
async fn missing_channel_sends_nothing() {
    let (base, captured) = mock_api(200, "{}").await;
    let client = local_client(ClientConfig::new("jwt-token").with_base(base));

    let err = client.get_overlays(None).await.unwrap_err();
    assert!(matches!(err, StreamElementsError::MissingChannel));
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn execute_as_decodes_typed_payload() {
    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Points {
        username: String,
        points: i64,
    }

    let (base, _captured) = mock_api(200, r#"{"username":"viewer","points":120}"#).await;
    let client = client_for(&base);

    let request = client
        .describe(&routes::GET_USER_POINTS, None, &[("user_id", "viewer")], None)
        .unwrap();
    let points: Points = client.execute_as(request).await.unwrap();
    assert_eq!(
        points,
        Points {
            username: "viewer".into(),
            points: 120,
        }
    );
}
