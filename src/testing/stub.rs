//! Minimal loopback HTTP stub for wire-level tests
//!
//! Binds an ephemeral port on 127.0.0.1, answers every request with one
//! scripted status and body, and captures each request so tests can assert
//! on method, target, headers, and JSON payload.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// One request as the stub received it on the wire
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    /// Request target including any query string
    pub target: String,
    headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    /// Header value by case-insensitive name
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Body parsed as JSON
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not valid JSON")
    }
}

/// Scripted one-response HTTP server on a loopback port
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    accept_task: JoinHandle<()>,
}

impl StubServer {
    /// Starts a stub answering every request with `status` and `body`
    ///
    /// # Panics
    ///
    /// Panics if no loopback port can be bound.
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub listener");
        let addr = listener.local_addr().expect("stub listener has no address");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&requests);
        let response = build_response(status, body);

        let accept_task = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                let captured = Arc::clone(&captured);
                let response = response.clone();
                tokio::spawn(async move {
                    serve_connection(stream, &captured, &response).await;
                });
            }
        });

        Self {
            addr,
            requests,
            accept_task,
        }
    }

    /// Base URL clients should point at
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request received so far
    #[must_use]
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received so far
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.accept_task.abort();
    }
}

fn build_response(status: u16, body: &str) -> String {
    let reason = match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        _ => "Stub",
    };
    format!(
        "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

async fn serve_connection(
    mut stream: TcpStream,
    requests: &Mutex<Vec<CapturedRequest>>,
    response: &str,
) {
    if let Some(request) = read_request(&mut stream).await {
        requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
    }
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

async fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        raw.extend_from_slice(&chunk[..read]);
        if let Some(end) = find_blank_line(&raw) {
            break end;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
    let mut lines = head.lines();

    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim().to_string();
        let value = value.trim().to_string();
        if name.eq_ignore_ascii_case("content-length") {
            content_length = value.parse().unwrap_or(0);
        }
        headers.push((name, value));
    }

    let body_start = header_end + 4;
    while raw.len() < body_start + content_length {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..read]);
    }

    let body_end = (body_start + content_length).min(raw.len());
    let body = String::from_utf8_lossy(&raw[body_start..body_end]).to_string();

    Some(CapturedRequest {
        method,
        target,
        headers,
        body,
    })
}

fn find_blank_line(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|window| window == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_response_known_and_unknown_status() {
        let response = build_response(200, "{}");
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("content-length: 2\r\n"));
        assert!(response.ends_with("\r\n\r\n{}"));

        let response = build_response(418, "");
        assert!(response.starts_with("HTTP/1.1 418 Stub\r\n"));
    }

    #[test]
    fn test_captured_request_header_lookup_is_case_insensitive() {
        let request = CapturedRequest {
            method: "POST".to_string(),
            target: "/".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: "{\"ok\":true}".to_string(),
        };
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("authorization"), None);
        assert_eq!(request.json_body()["ok"], true);
    }

    #[tokio::test]
    async fn test_stub_captures_request_line_headers_and_body() {
        let stub = StubServer::start(201, "{\"id\":1}").await;

        let mut stream = TcpStream::connect(stub.base_url().trim_start_matches("http://"))
            .await
            .unwrap();
        let payload = "{\"name\":\"device\"}";
        let request = format!(
            "POST /things?tag=a HTTP/1.1\r\nhost: stub\r\nx-test: yes\r\ncontent-length: {}\r\n\r\n{payload}",
            payload.len()
        );
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 201 Created\r\n"));
        assert!(response.ends_with("{\"id\":1}"));

        let captured = stub.requests();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].method, "POST");
        assert_eq!(captured[0].target, "/things?tag=a");
        assert_eq!(captured[0].header("x-test"), Some("yes"));
        assert_eq!(captured[0].json_body()["name"], "device");
    }
}
