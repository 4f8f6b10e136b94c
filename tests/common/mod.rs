//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Start a programmable mock records API.
///
/// The handler receives the raw request bytes (head + body) and returns
/// `(status, json_body)`. Runs until the test process exits.
pub async fn start_mock_records_api<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn(Vec<u8>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let request = read_request(&mut socket).await;
                        let (status, body) = f(request).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Read one HTTP request: head, then as many body bytes as Content-Length
/// announces.
async fn read_request(socket: &mut TcpStream) -> Vec<u8> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        match socket.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                data.extend_from_slice(&buf[..n]);
                if let Some(head_end) = find_head_end(&data) {
                    let head = String::from_utf8_lossy(&data[..head_end]);
                    let content_length = head
                        .lines()
                        .find_map(|line| {
                            let (key, value) = line.split_once(':')?;
                            if key.eq_ignore_ascii_case("content-length") {
                                value.trim().parse::<usize>().ok()
                            } else {
                                None
                            }
                        })
                        .unwrap_or(0);
                    if data.len() >= head_end + 4 + content_length {
                        break;
                    }
                }
            }
            Err(_) => break,
        }
    }
    data
}

fn find_head_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Extract the JSON body of a captured request.
#[allow(dead_code)]
pub fn request_body(raw: &[u8]) -> serde_json::Value {
    let head_end = find_head_end(raw).expect("captured request has no head");
    serde_json::from_slice(&raw[head_end + 4..]).expect("captured request body is not JSON")
}

/// Build a records search response body from (name, ownerId, id) triples.
#[allow(dead_code)]
pub fn records_body(entries: &[(&str, &str, &str)]) -> String {
    let records: Vec<serde_json::Value> = entries
        .iter()
        .map(|(name, owner, id)| {
            serde_json::json!({
                "id": id,
                "ownerId": owner,
                "name": name,
                "recordType": "object",
                "ownerName": "someone",
                "visits": 7,
                "rating": 0.5,
                "isPublic": true,
                "isListed": true,
                "isDeleted": false
            })
        })
        .collect();
    serde_json::json!({ "records": records }).to_string()
}
