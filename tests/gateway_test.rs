//! End-to-end tests for the tool gateway against a stub HTTP server.
//!
//! The stub is a raw TCP listener answering one canned HTTP response, which
//! is enough to verify request shapes (method, path, query, auth header) and
//! the error mapping without a real platform account.

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use widgetd::mcp::ToolRegistry;
use widgetd::{Config, PlatformClient, ToolError};

/// Spawn a one-shot HTTP stub. Returns the base URL and a receiver yielding
/// the raw request bytes as text.
async fn spawn_stub(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }
        let _ = tx.send(String::from_utf8_lossy(&request).to_string());

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.flush().await.unwrap();
    });

    (format!("http://{}", addr), rx)
}

/// True once the headers and the declared body length have arrived.
fn request_complete(request: &[u8]) -> bool {
    let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&request[..pos]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    request.len() >= pos + 4 + content_length
}

fn client(base_url: &str) -> PlatformClient {
    PlatformClient::new(&Config::new(base_url, "test-token"))
}

#[tokio::test]
async fn test_get_widget_request_shape_and_decode() {
    let (base_url, rx) = spawn_stub("200 OK", r#"{"id":"w1","type":"faq","data":{"a":1}}"#).await;

    let widget = client(&base_url).get_widget("w1").await.unwrap();
    assert_eq!(widget["type"], json!("faq"));
    assert_eq!(widget["data"]["a"], json!(1));

    let request = rx.await.unwrap().to_lowercase();
    assert!(request.starts_with("get /widgets/w1 "));
    assert!(request.contains("authorization: bearer test-token"));
}

#[tokio::test]
async fn test_list_widgets_passes_pagination_and_filters() {
    let (base_url, rx) = spawn_stub("200 OK", "{}").await;

    client(&base_url)
        .list_widgets(2, 5, "p1", "", "faq")
        .await
        .unwrap();

    let request = rx.await.unwrap();
    let request_line = request.lines().next().unwrap();
    assert!(request_line.contains("page=2"));
    assert!(request_line.contains("limit=5"));
    assert!(request_line.contains("projectId=p1"));
    assert!(request_line.contains("type=faq"));
}

#[tokio::test]
async fn test_analytics_repeats_events_parameter() {
    let (base_url, rx) = spawn_stub("200 OK", "{}").await;

    client(&base_url)
        .get_widget_analytics(
            "w1",
            "2024-01-01",
            "2024-02-01",
            "week",
            &["view".to_string(), "click".to_string()],
        )
        .await
        .unwrap();

    let request_line = rx.await.unwrap().lines().next().unwrap().to_string();
    assert!(request_line.contains("breakdown=week"));
    assert!(request_line.contains("events=view"));
    assert!(request_line.contains("events=click"));
}

#[tokio::test]
async fn test_widget_schema_path_uses_hyphenated_type() {
    let (base_url, rx) = spawn_stub("200 OK", "{}").await;

    client(&base_url)
        .get_widget_schema("pricing_table")
        .await
        .unwrap();

    let request = rx.await.unwrap();
    assert!(request.contains("GET /widget-types/pricing-table/schema"));
}

#[tokio::test]
async fn test_non_success_status_maps_to_upstream() {
    let (base_url, _rx) = spawn_stub("404 Not Found", r#"{"message":"widget not found"}"#).await;

    let err = client(&base_url).get_widget("missing").await.unwrap_err();
    match err {
        ToolError::Upstream { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("widget not found"));
        }
        other => panic!("expected Upstream error, got {other}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_maps_to_transport() {
    // Discard port: nothing listens there.
    let err = client("http://127.0.0.1:9").get_widget("w1").await.unwrap_err();
    assert!(matches!(err, ToolError::Transport(_)));
}

#[tokio::test]
async fn test_update_widget_merges_before_put() {
    let (base_url, rx) = spawn_stub("200 OK", "{}").await;
    let registry = ToolRegistry::new(client(&base_url)).unwrap();

    let blocks = registry
        .call_tool(
            "update-widget",
            &json!({
                "widgetId": "w1",
                "currentWidgetData": {
                    "a": 1,
                    "b": {"x": 1, "y": 2},
                    "integrations": {"token": "secret"}
                },
                "nextWidgetData": {
                    "b": {"y": 5},
                    "integrations": {"token": "hacked"},
                    "list": [1, 2, 3]
                }
            }),
        )
        .await
        .unwrap();

    assert_eq!(blocks[0].text, "Widget updated successfully");

    let request = rx.await.unwrap();
    assert!(request.starts_with("PUT /widgets/w1 "));

    // The protected field kept its current value on the wire.
    let body_start = request.find("\r\n\r\n").unwrap() + 4;
    let body: Value = serde_json::from_str(&request[body_start..]).unwrap();
    assert_eq!(
        body["data"],
        json!({
            "a": 1,
            "b": {"x": 1, "y": 5},
            "integrations": {"token": "secret"},
            "list": [1, 2, 3]
        })
    );
}

#[tokio::test]
async fn test_unknown_tool_makes_no_remote_call() {
    // Unroutable client: a network attempt would fail as Transport.
    let registry = ToolRegistry::new(client("http://127.0.0.1:9")).unwrap();
    let err = registry
        .call_tool("delete-widget", &json!({"widgetId": "w1"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}

#[tokio::test]
async fn test_invalid_arguments_make_no_remote_call() {
    let registry = ToolRegistry::new(client("http://127.0.0.1:9")).unwrap();
    let err = registry
        .call_tool(
            "get-widget-analytics",
            &json!({"widgetId": "w1", "breakdown": "hour"}),
        )
        .await
        .unwrap_err();
    match err {
        ToolError::Validation { field, .. } => assert_eq!(field, "breakdown"),
        other => panic!("expected Validation error, got {other}"),
    }
}

#[tokio::test]
async fn test_links_resolves_without_network() {
    let registry = ToolRegistry::new(client("http://127.0.0.1:9")).unwrap();
    let blocks = registry
        .call_tool("links", &json!({"type": "billing"}))
        .await
        .unwrap();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[1].text.contains("billing"));
}

#[tokio::test]
async fn test_create_widget_posts_draft_and_omits_empty_project() {
    let (base_url, rx) = spawn_stub("200 OK", r#"{"id":"new"}"#).await;
    let registry = ToolRegistry::new(client(&base_url)).unwrap();

    registry
        .call_tool(
            "create-widget",
            &json!({"widgetType": "faq", "widgetData": {"q": []}}),
        )
        .await
        .unwrap();

    let request = rx.await.unwrap();
    assert!(request.starts_with("POST /widgets "));

    let body_start = request.find("\r\n\r\n").unwrap() + 4;
    let body: Value = serde_json::from_str(&request[body_start..]).unwrap();
    assert_eq!(body["type"], json!("faq"));
    assert_eq!(body["name"], json!("My Widget"));
    assert_eq!(body["status"], json!("draft"));
    assert!(body.get("projectId").is_none());
}
