//! End-to-end tests over a real TCP socket.
//!
//! The server is bound to an ephemeral port on loopback and driven with
//! raw HTTP/1.1 requests, then shut down through the graceful-shutdown
//! future.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::sync::Arc;

use items_service::config::ServerConfig;
use items_service::server::{serve_listener, start_server, ServerError};
use items_service::store::ItemStore;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn send(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_serves_items_over_tcp_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let store = Arc::new(ItemStore::new());
    let (tx, rx) = oneshot::channel::<()>();

    let server = tokio::spawn(serve_listener(listener, Arc::clone(&store), async move {
        let _ = rx.await;
    }));

    let response = send(
        addr,
        "GET /items HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.ends_with("[]"));

    let body = r#"{"name":"test item"}"#;
    let request = format!(
        "POST /items HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let response = send(addr, &request).await;
    assert!(response.starts_with("HTTP/1.1 201"));
    assert!(response.ends_with(body));

    assert_eq!(store.snapshot().await, vec![json!({"name": "test item"})]);

    tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_start_server_reports_port_in_use() {
    let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = occupied.local_addr().unwrap().port();

    let config = ServerConfig {
        host: String::from("127.0.0.1"),
        port,
    };
    let result = start_server(&config, Arc::new(ItemStore::new())).await;

    assert!(matches!(result, Err(ServerError::Bind(_))));
}

#[tokio::test]
async fn test_start_server_rejects_invalid_host() {
    let config = ServerConfig {
        host: String::from("not an ip"),
        port: 5000,
    };
    let result = start_server(&config, Arc::new(ItemStore::new())).await;

    assert!(matches!(result, Err(ServerError::Bind(_))));
}
