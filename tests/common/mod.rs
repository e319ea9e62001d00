//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use vanity_redirector::config::RedirectorConfig;
use vanity_redirector::http::HttpServer;

/// Spawn the redirector on an ephemeral port and return its address.
///
/// The listener is bound before returning, so clients can connect right away.
pub async fn spawn_redirector() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(RedirectorConfig::default());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// A response read back from a raw socket exchange.
#[allow(dead_code)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[allow(dead_code)]
impl RawResponse {
    /// First header value with the given name, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Send a raw HTTP/1.1 request and read the response until the server closes.
///
/// Needed for request targets reqwest cannot produce, such as the
/// absolute-form used by proxied traffic. The request should carry
/// `Connection: close` so the read terminates.
#[allow(dead_code)]
pub async fn send_raw_request(addr: SocketAddr, request: &str) -> RawResponse {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    let (head, body) = raw
        .split_once("\r\n\r\n")
        .expect("response must have a header section");
    let mut lines = head.lines();

    let status_line = lines.next().expect("response must have a status line");
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .expect("status line must carry a status code");

    let headers = lines
        .map(|line| {
            let (name, value) = line.split_once(':').expect("malformed header line");
            (name.trim().to_string(), value.trim().to_string())
        })
        .collect();

    RawResponse {
        status,
        headers,
        body: body.to_string(),
    }
}
