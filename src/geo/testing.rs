//! Loopback HTTP server answering every request with one canned response.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

pub struct CannedServer {
    /// Base URL to put in `ApiConfig::base_url`.
    pub base_url: String,
    /// Request line (`GET /api/... HTTP/1.1`) of every request received.
    pub requests: mpsc::UnboundedReceiver<String>,
}

/// Serve `status` (e.g. `"200 OK"`) with a JSON `body` on 127.0.0.1 until the
/// test's runtime shuts down.
pub async fn serve(status: &'static str, body: &'static str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, requests) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&head);
                let _ = tx.send(head.lines().next().unwrap_or_default().to_string());

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    CannedServer {
        base_url: format!("http://{}/api", addr),
        requests,
    }
}
