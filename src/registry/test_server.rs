//! One-shot local HTTP endpoint for registry tests

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A listener that answers exactly one request with a canned response
pub(crate) struct OneShotServer {
    /// Base URL such as `http://127.0.0.1:41234`
    pub base_url: String,
    /// Resolves to the request head the client sent
    pub request: JoinHandle<String>,
}

/// Serve `status_line` (e.g. `404 Not Found`) with `body` to the first client
pub(crate) async fn serve_once(status_line: &str, body: &str) -> OneShotServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let request = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });

    OneShotServer { base_url, request }
}
