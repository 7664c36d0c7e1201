//! Integration tests for the streamable HTTP transport's probe route.

use std::sync::Arc;
use std::time::Duration;

use mcp_workbench::config::GlobalConfig;
use mcp_workbench::mcp::handler::AppState;
use mcp_workbench::mcp::http::serve_http;
use mcp_workbench::AppError;
use tokio_util::sync::CancellationToken;

/// Spawn the HTTP server on an ephemeral port.
///
/// Returns the base URL and a cancellation token for clean shutdown.
async fn spawn_http_server() -> (String, CancellationToken) {
    // Discover a free port, then configure the server to use it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let mut config = GlobalConfig::default();
    config.http.port = port;

    let state = Arc::new(AppState::new(Arc::new(config)));
    let ct = CancellationToken::new();

    let server_ct = ct.clone();
    tokio::spawn(async move {
        let _ = serve_http(state, server_ct).await;
    });

    // Poll until the server answers rather than sleeping a fixed interval.
    let base_url = format!("http://127.0.0.1:{port}");
    for _ in 0..50 {
        if reqwest::get(format!("{base_url}/health")).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    (base_url, ct)
}

#[tokio::test]
async fn occupied_port_surfaces_a_transport_error() {
    // Hold the port so the server's own bind fails.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral");
    let port = listener.local_addr().expect("local addr").port();

    let mut config = GlobalConfig::default();
    config.http.port = port;
    let state = Arc::new(AppState::new(Arc::new(config)));

    let err = serve_http(state, CancellationToken::new())
        .await
        .expect_err("binding an occupied port fails");
    assert!(matches!(err, AppError::Transport(_)));
}

#[tokio::test]
async fn health_returns_ok() {
    let (base_url, ct) = spawn_http_server().await;

    let resp = reqwest::get(format!("{base_url}/health"))
        .await
        .expect("GET /health");

    assert!(resp.status().is_success());
    assert_eq!(resp.text().await.expect("body"), "ok");

    ct.cancel();
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (base_url, ct) = spawn_http_server().await;

    let resp = reqwest::get(format!("{base_url}/nope"))
        .await
        .expect("GET /nope");

    assert_eq!(resp.status().as_u16(), 404);

    ct.cancel();
}
