//! Integration tests for the HTTP channel
//!
//! Each test starts an in-process analytics stub with axum on its own
//! runtime thread and talks to it through the blocking SDK client.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tsr_domain::{ParameterKey, RelationQuery};
use tsr_sdk::{ChannelConfig, HttpChannel, RelationQueryClient, SdkError};

type Captured = Arc<Mutex<Vec<Value>>>;

/// Serve `app` on an ephemeral port and return its base URL
fn spawn_server(app: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    format!("http://{}", addr)
}

fn sample_query() -> RelationQuery {
    RelationQuery::new(
        ParameterKey::parse("100/5/3").unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap(),
    )
}

fn relations_batch() -> Value {
    json!({
        "messages": [
            { "type": "analytics_status", "state": "running" },
            {
                "type": "time_scoped_relations",
                "relations": [
                    {
                        "parameter_a": { "system_id": 100, "element_id": 5, "parameter_id": 3, "table_index": "" },
                        "parameter_b": { "system_id": 100, "element_id": 7, "parameter_id": 9, "table_index": "" },
                        "confidence": 0.87
                    }
                ]
            },
            {
                "type": "time_scoped_relations",
                "relations": [
                    {
                        "parameter_a": { "system_id": 100, "element_id": 5, "parameter_id": 3 },
                        "parameter_b": { "system_id": 200, "element_id": 8, "parameter_id": 1003, "table_index": "eth0" },
                        "confidence": 0.42
                    }
                ]
            }
        ]
    })
}

fn client_for(endpoint: &str) -> RelationQueryClient<HttpChannel> {
    let channel = HttpChannel::new(&ChannelConfig::new(endpoint)).unwrap();
    RelationQueryClient::new(channel)
}

#[test]
fn test_fetch_relations_over_http() {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));

    async fn handler(State(captured): State<Captured>, Json(body): Json<Value>) -> Json<Value> {
        captured.lock().unwrap().push(body);
        Json(relations_batch())
    }

    let app = Router::new()
        .route("/api/analytics/messages", post(handler))
        .with_state(captured.clone());
    let endpoint = spawn_server(app);

    let relations = client_for(&endpoint)
        .fetch_relations(&sample_query())
        .unwrap();

    assert_eq!(relations.len(), 2);
    assert_eq!(relations[0].related, ParameterKey::new(100, 7, 9));
    assert_eq!(relations[0].confidence, 0.87);
    assert_eq!(
        relations[1].related,
        ParameterKey::with_table_index(200, 8, 1003, "eth0")
    );

    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let messages = requests[0]["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["type"], "get_time_scoped_relations");
    assert_eq!(messages[0]["parameter"]["system_id"], 100);
    assert_eq!(messages[0]["parameter"]["element_id"], 5);
    assert_eq!(messages[0]["parameter"]["parameter_id"], 3);
    assert_eq!(messages[0]["parameter"]["table_index"], "");
    assert_eq!(messages[0]["start"], "2024-01-01T00:00:00Z");
    assert_eq!(messages[0]["end"], "2024-01-01T01:00:00Z");
}

#[test]
fn test_bearer_token_is_sent() {
    async fn handler(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
        match headers.get("authorization").and_then(|v| v.to_str().ok()) {
            Some("Bearer secret-token") => Ok(Json(json!({ "messages": [] }))),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }

    let app = Router::new().route("/api/analytics/messages", post(handler));
    let endpoint = spawn_server(app);

    let mut config = ChannelConfig::new(&endpoint);
    config.api_token = Some("secret-token".to_string());
    let client = RelationQueryClient::new(HttpChannel::new(&config).unwrap());
    assert!(client.fetch_relations(&sample_query()).unwrap().is_empty());

    let err = client_for(&endpoint)
        .fetch_relations(&sample_query())
        .unwrap_err();
    assert!(matches!(err, SdkError::Status { status: 401, .. }));
}

#[test]
fn test_server_error_is_reported_with_body() {
    async fn handler() -> (StatusCode, &'static str) {
        (StatusCode::SERVICE_UNAVAILABLE, "analytics module not running")
    }

    let app = Router::new().route("/api/analytics/messages", post(handler));
    let endpoint = spawn_server(app);

    match client_for(&endpoint).fetch_relations(&sample_query()) {
        Err(SdkError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "analytics module not running");
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_malformed_response_is_decode_error() {
    async fn handler() -> &'static str {
        "this is not json"
    }

    let app = Router::new().route("/api/analytics/messages", post(handler));
    let endpoint = spawn_server(app);

    let err = client_for(&endpoint)
        .fetch_relations(&sample_query())
        .unwrap_err();
    assert!(matches!(err, SdkError::Decode(_)));
}

#[test]
fn test_connection_refused() {
    // Reserve a port, then free it so nothing is listening there
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = client_for(&format!("http://127.0.0.1:{}", port))
        .fetch_relations(&sample_query())
        .unwrap_err();

    match err {
        SdkError::ConnectionError { .. } | SdkError::Request { .. } => {}
        other => panic!("Unexpected error type: {:?}", other),
    }
}
