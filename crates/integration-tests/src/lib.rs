//! Integration tests for Nexus.
//!
//! # Test Categories
//!
//! - `catalog_fetch` - Catalog client and store against real HTTP
//! - `storefront_flow` - Full login → browse → cart → checkout flows
//!
//! The library provides the shared harness: [`init_tracing`] and
//! [`MockCatalog`], an in-process HTTP server standing in for the catalog
//! endpoint so the suite runs with no external services and no credentials.

use std::collections::HashMap;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Initialize tracing for tests. Safe to call from every test; only the
/// first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A canned HTTP response: status code plus JSON body.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    /// 200 OK with the given JSON body.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// An error status with a small JSON body.
    #[must_use]
    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error": "error"}"#.to_string(),
        }
    }
}

/// An in-process catalog endpoint serving canned responses by request path.
///
/// Unmatched paths answer 404. The listener task is aborted on drop.
#[derive(Debug)]
pub struct MockCatalog {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockCatalog {
    /// Bind to an ephemeral local port and start serving `routes`
    /// (path → response, e.g. `("/", ...)` or `("/7", ...)`).
    ///
    /// # Panics
    ///
    /// Panics when the listener cannot be bound (test environment only).
    pub async fn start(routes: Vec<(&str, CannedResponse)>) -> Self {
        let routes: HashMap<String, CannedResponse> = routes
            .into_iter()
            .map(|(path, response)| (path.to_string(), response))
            .collect();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock catalog listener");
        let addr = listener.local_addr().expect("mock catalog local addr");

        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();

                tokio::spawn(async move {
                    // Read until the end of the request headers; catalog
                    // requests are plain GETs with no body.
                    let mut buf = Vec::new();
                    let mut chunk = [0_u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(chunk.get(..n).unwrap_or_default()),
                        }
                    }

                    let request = String::from_utf8_lossy(&buf);
                    let path = request
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or("/")
                        .to_string();

                    let response = routes
                        .get(&path)
                        .cloned()
                        .unwrap_or_else(|| CannedResponse {
                            status: 404,
                            body: r#"{"error": "not found"}"#.to_string(),
                        });

                    let reason = match response.status {
                        200 => "OK",
                        404 => "Not Found",
                        500 => "Internal Server Error",
                        _ => "Error",
                    };
                    let payload = format!(
                        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        response.status,
                        reason,
                        response.body.len(),
                        response.body
                    );

                    let _ = stream.write_all(payload.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self { addr, handle }
    }

    /// Base URL of the mock endpoint (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
