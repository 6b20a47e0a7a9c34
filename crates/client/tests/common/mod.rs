//! Shared helpers for client integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use industrias_client::{ApiClient, ClientConfig, MemoryTokenStore, RecordingRedirect};
use industrias_core::retry::RetryPolicy;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Policy with the default budget but short timings.
pub fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        timeout: Duration::from_millis(300),
        max_retries: 2,
        backoff_unit: Duration::from_millis(10),
    }
}

/// Serve `app` on an ephemeral port and return its base URL.
pub async fn spawn_app(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Build a client against `base_url` with the given token store and redirect recorder.
pub fn test_client(
    base_url: &str,
    store: MemoryTokenStore,
    redirect: Arc<RecordingRedirect>,
) -> ApiClient {
    let config = ClientConfig::from_lookup(|_| None).with_base_url(base_url);
    ApiClient::new(&config, Arc::new(store), redirect)
        .unwrap()
        .with_policy(fast_policy())
}

/// Raw backend that drops the first `failures` connections without a
/// response, then answers `200` with `body`.
#[allow(dead_code)]
pub async fn spawn_flaky_backend(failures: usize, body: &'static str) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            if counter.fetch_add(1, Ordering::SeqCst) < failures {
                drop(socket);
                continue;
            }
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{}", addr), hits)
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
