//! Integration tests for the request dispatcher using wiremock.
//!
//! These tests pin down the dispatcher's contract independent of any
//! named operation:
//!
//! - the held API key is always present in the query and overwrites
//!   caller-supplied values under the same name;
//! - path segments join in order;
//! - successful responses pass through structurally unchanged;
//! - transport, status, and decode failures all collapse to `None` on
//!   the parity surface, with a diagnostic line naming the URL;
//! - the same failures surface as typed errors in strict mode.

use automox_api::{Automox, AutomoxError, NO_QUERY};
use reqwest::Method;
use std::io::Write;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: creates a client pointed at the given wiremock server.
fn mock_client(server: &MockServer) -> Automox {
    Automox::with_base_url("test-key", &format!("{}/", server.uri()))
}

// ── Key injection ──────────────────────────────────────────────────────

#[tokio::test]
async fn every_request_carries_the_api_key() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    // The mock only matches when api_key is present with the held value.
    Mock::given(method("GET"))
        .and(path("orgs"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let result = client
        .dispatch(Method::GET, NO_QUERY, None, &["orgs".into()])
        .await;
    assert!(result.is_some(), "mock requires api_key in the query");
}

#[tokio::test]
async fn caller_supplied_api_key_is_overwritten() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("orgs"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    // The forged key must be replaced by the held one; were both sent,
    // the query_param matcher would see the forged value first and the
    // request count assertion below would fail.
    let result = client
        .dispatch(
            Method::GET,
            Some(&[("api_key", "forged".to_string())]),
            None,
            &["orgs".into()],
        )
        .await;
    assert!(result.is_some(), "held key must win over the forged one");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(name, _)| name == "api_key")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert_eq!(
        keys,
        vec!["test-key".to_string()],
        "exactly one api_key pair, holding the client's key"
    );
}

// ── Path construction ──────────────────────────────────────────────────

#[tokio::test]
async fn path_segments_join_in_order() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("servers/123/queues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let result = client
        .dispatch(
            Method::GET,
            NO_QUERY,
            None,
            &["servers".into(), 123u64.into(), "queues".into()],
        )
        .await;
    assert!(result.is_some(), "segments must form servers/123/queues");
}

// ── Success path ───────────────────────────────────────────────────────

#[tokio::test]
async fn successful_response_passes_through_unchanged() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 42})))
        .mount(&server)
        .await;

    let value = client
        .dispatch(Method::GET, NO_QUERY, None, &["orgs".into()])
        .await
        .unwrap();
    assert_eq!(
        value,
        serde_json::json!({"id": 42}),
        "decoded value must equal the source JSON structurally"
    );
}

#[tokio::test]
async fn scalar_and_array_responses_are_valid() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2, 3])))
        .mount(&server)
        .await;

    let value = client
        .dispatch(Method::GET, NO_QUERY, None, &["events".into()])
        .await
        .unwrap();
    assert_eq!(value, serde_json::json!([1, 2, 3]));
}

// ── Parity failure path ────────────────────────────────────────────────

/// Writer that appends formatted tracing output to a shared buffer so
/// the tests can assert on emitted diagnostics.
#[derive(Clone)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn network_failure_returns_none_and_logs_the_url() {
    // Nothing listens on port 1, so the connection is refused.
    let client = Automox::with_base_url("test-key", "http://127.0.0.1:1/");

    let buf = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(CaptureWriter(buf.clone()))
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let result = client
        .dispatch(Method::GET, NO_QUERY, None, &["servers".into()])
        .await;
    assert!(result.is_none(), "transport failure must yield None, not panic");

    let log = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    assert!(
        log.contains("127.0.0.1:1/servers"),
        "diagnostic must name the attempted URL, got: {log}"
    );
}

#[tokio::test]
async fn failure_diagnostic_includes_the_body() {
    let client = Automox::with_base_url("test-key", "http://127.0.0.1:1/");

    let buf = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(CaptureWriter(buf.clone()))
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let result = client
        .dispatch(
            Method::PUT,
            NO_QUERY,
            Some(r#"{"manual_approval": true}"#),
            &["approvals".into(), 7u64.into()],
        )
        .await;
    assert!(result.is_none());

    let log = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    assert!(
        log.contains("manual_approval"),
        "diagnostic must include the request body, got: {log}"
    );
}

#[tokio::test]
async fn error_status_returns_none() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("servers/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "not found"})),
        )
        .mount(&server)
        .await;

    let result = client
        .dispatch(
            Method::GET,
            NO_QUERY,
            None,
            &["servers".into(), 404u64.into()],
        )
        .await;
    assert!(result.is_none(), "non-2xx must collapse to None");
}

#[tokio::test]
async fn malformed_json_returns_none() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client
        .dispatch(Method::GET, NO_QUERY, None, &["orgs".into()])
        .await;
    assert!(result.is_none(), "undecodable payload must collapse to None");
}

// ── Strict mode ────────────────────────────────────────────────────────

#[tokio::test]
async fn strict_mode_preserves_status_and_body() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("orgs"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("Too Many Requests: slow down"),
        )
        .mount(&server)
        .await;

    let err = client
        .request(Method::GET, NO_QUERY, None, &["orgs".into()])
        .await
        .unwrap_err();
    match err {
        AutomoxError::Status { status, body } => {
            assert_eq!(status.as_u16(), 429);
            assert!(
                body.contains("slow down"),
                "provider body must be preserved"
            );
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn strict_mode_reports_decode_failures() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let err = client
        .request(Method::GET, NO_QUERY, None, &["orgs".into()])
        .await
        .unwrap_err();
    assert!(
        matches!(err, AutomoxError::Decode(_)),
        "empty body is not JSON and must surface as Decode, got {err:?}"
    );
}

#[tokio::test]
async fn strict_mode_reports_transport_failures() {
    let client = Automox::with_base_url("test-key", "http://127.0.0.1:1/");

    let err = client
        .request(Method::GET, NO_QUERY, None, &["orgs".into()])
        .await
        .unwrap_err();
    assert!(
        matches!(err, AutomoxError::Transport(_)),
        "refused connection must surface as Transport, got {err:?}"
    );
}
