//! Streamable HTTP transport router tests.

use std::sync::Arc;
use std::time::Duration;

use ai_workshop_mcp::llm::ModelClient;
use ai_workshop_mcp::mcp::context::AppState;
use ai_workshop_mcp::mcp::handler::SERVER_NAME;
use ai_workshop_mcp::mcp::http::{router, serve_http};
use ai_workshop_mcp::GlobalConfig;
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

use super::test_helpers::{test_state, MemoryDocumentStore, MockModel};

const ACCEPT: &str = "application/json, text/event-stream";

async fn spawn_router() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(Arc::new(test_state()), &CancellationToken::new());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let base = spawn_router().await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn initialize_over_http_reports_server_name() {
    let base = spawn_router().await;
    let client = reqwest::Client::new();

    let mut response = client
        .post(format!("{base}/mcp"))
        .header("accept", ACCEPT)
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": { "name": "integration-test", "version": "0.0.0" }
            }
        }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success(), "{}", response.status());

    // The reply may arrive as an SSE stream that stays open.
    let mut body = String::new();
    let read = tokio::time::timeout(Duration::from_secs(5), async {
        while let Some(chunk) = response.chunk().await.unwrap() {
            body.push_str(&String::from_utf8_lossy(&chunk));
            if body.contains(SERVER_NAME) {
                break;
            }
        }
    })
    .await;

    assert!(read.is_ok(), "no initialize result within timeout: {body}");
    assert!(body.contains(SERVER_NAME), "{body}");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = spawn_router().await;

    let response = reqwest::get(format!("{base}/nope")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

fn initialize_request() -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": { "name": "integration-test", "version": "0.0.0" }
        }
    })
}

#[tokio::test]
async fn cancellation_stops_server_with_tool_call_in_flight() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = GlobalConfig {
        http_port: port,
        ..GlobalConfig::default()
    };
    let model = Arc::new(MockModel::replying("late").with_delay(Duration::from_secs(60)));
    let state = Arc::new(AppState::new(
        Arc::new(config),
        Arc::clone(&model) as Arc<dyn ModelClient>,
        Arc::new(MemoryDocumentStore::default()),
    ));

    let ct = CancellationToken::new();
    let server = tokio::spawn(serve_http(state, ct.clone()));
    let base = format!("http://127.0.0.1:{port}/mcp");
    let client = reqwest::Client::new();

    // Wait for the listener.
    let mut initialized = None;
    for _ in 0..50 {
        match client
            .post(&base)
            .header("accept", ACCEPT)
            .json(&initialize_request())
            .send()
            .await
        {
            Ok(response) => {
                initialized = Some(response);
                break;
            }
            Err(_) => tokio::time::sleep(Duration::from_millis(20)).await,
        }
    }
    let initialized = initialized.expect("server accepts connections");
    assert!(initialized.status().is_success(), "{}", initialized.status());
    let session = initialized
        .headers()
        .get("mcp-session-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("session id header");

    let ack = client
        .post(&base)
        .header("accept", ACCEPT)
        .header("mcp-session-id", &session)
        .json(&json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }))
        .send()
        .await
        .unwrap();
    assert!(ack.status().is_success(), "{}", ack.status());

    let call = {
        let client = client.clone();
        let base = base.clone();
        let session = session.clone();
        tokio::spawn(async move {
            client
                .post(&base)
                .header("accept", ACCEPT)
                .header("mcp-session-id", &session)
                .json(&json!({
                    "jsonrpc": "2.0",
                    "id": 2,
                    "method": "tools/call",
                    "params": { "name": "optimize_code", "arguments": { "code": "x" } }
                }))
                .send()
                .await
        })
    };

    for _ in 0..100 {
        if !model.calls().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(model.calls().len(), 1, "tool call reached the model");

    ct.cancel();
    let stopped = tokio::time::timeout(Duration::from_secs(5), server).await;
    let result = stopped.expect("server stops after cancellation").unwrap();
    assert!(result.is_ok(), "{result:?}");

    call.abort();
    drop(initialized);
}
