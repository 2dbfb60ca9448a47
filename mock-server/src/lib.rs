//! Fixture HTTP server for exercising the platform HTTP client.
//!
//! Stateless routes with known payloads: a short text body, an empty body, a
//! deterministic payload much larger than one client read chunk, a binary
//! body with embedded NULs, and a JSON document. Integration tests bind an
//! ephemeral port and drive the raw-socket client against these routes.

use axum::{http::header, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;

/// Body served by `/hello`.
pub const HELLO_BODY: &str = "Hello, platform!";

#[derive(Serialize)]
struct Status {
    service: &'static str,
    ok: bool,
}

pub fn app() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/empty", get(empty))
        .route("/large", get(large))
        .route("/bytes", get(bytes))
        .route("/json", get(json))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The `/large` payload: deterministic numbered lines, well past any single
/// socket read.
pub fn large_payload() -> String {
    let mut out = String::new();
    let mut line = 0u32;
    while out.len() < 96 * 1024 {
        out.push_str(&format!("line {line:06}\n"));
        line += 1;
    }
    out
}

/// The `/bytes` payload: not valid UTF-8, with embedded NULs.
pub fn binary_payload() -> Vec<u8> {
    vec![0x00, 0xde, 0xad, 0x00, 0xbe, 0xef, 0xff, 0x7f, 0x00, 0x80]
}

async fn hello() -> &'static str {
    HELLO_BODY
}

async fn empty() -> StatusCode {
    StatusCode::OK
}

async fn large() -> String {
    large_payload()
}

async fn bytes() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/octet-stream")],
        binary_payload(),
    )
}

async fn json() -> Json<Status> {
    Json(Status {
        service: "mock-server",
        ok: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_payload_is_deterministic_and_large() {
        let a = large_payload();
        let b = large_payload();
        assert_eq!(a, b);
        assert!(a.len() >= 96 * 1024);
        assert!(a.starts_with("line 000000\n"));
    }

    #[test]
    fn binary_payload_is_not_utf8() {
        let payload = binary_payload();
        assert!(payload.contains(&0));
        assert!(std::str::from_utf8(&payload).is_err());
    }

    #[test]
    fn status_serializes_to_json() {
        let json = serde_json::to_value(Status {
            service: "mock-server",
            ok: true,
        })
        .unwrap();
        assert_eq!(json["service"], "mock-server");
        assert_eq!(json["ok"], true);
    }
}
