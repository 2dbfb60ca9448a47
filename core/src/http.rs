//! Raw-socket HTTP/1.0 client.
//!
//! # Design
//! The request always carries `Connection: close`, so the peer closing the
//! socket is the one and only end-of-response signal. That sidesteps
//! Content-Length and chunked-encoding parsing entirely, at the price of one
//! connection per request — this client cannot be upgraded to keep-alive
//! without a new response-framing strategy, and deliberately is not.
//!
//! `get` is the transfer engine with an explicit port; `fetch` is the URL
//! surface the embedding environment sees, pinned to port 80. Everything is
//! blocking with no timeout: a silent peer blocks the calling thread
//! indefinitely.

use std::io::{ErrorKind, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use crate::buffer::ResponseBuffer;
use crate::error::PlatformError;
use crate::url::ParsedUrl;

/// Upper bound on the formatted request. Oversized requests are rejected,
/// never truncated.
const MAX_REQUEST_LEN: usize = 512;

/// Socket read granularity.
const READ_CHUNK: usize = 1024;

const HTTP_PORT: u16 = 80;

/// A received HTTP response: one owned buffer, with the header block and the
/// body exposed as borrowed views into it.
///
/// The body begins immediately after the first `\r\n\r\n`. A response with no
/// such separator is not a parse error: the body is the entire buffer and the
/// header block is empty.
#[derive(Debug)]
pub struct HttpResponse {
    buf: ResponseBuffer,
    separator: Option<usize>,
}

impl HttpResponse {
    /// Split an accumulated response payload into header block and body.
    pub fn new(buf: ResponseBuffer) -> Self {
        let separator = find_separator(buf.as_bytes());
        Self { buf, separator }
    }

    /// Everything before the first blank line, or empty if there is none.
    pub fn header_block(&self) -> &[u8] {
        match self.separator {
            Some(at) => &self.buf.as_bytes()[..at],
            None => &[],
        }
    }

    /// Everything after the first blank line, or the whole payload if there
    /// is none.
    pub fn body(&self) -> &[u8] {
        match self.separator {
            Some(at) => &self.buf.as_bytes()[at + 4..],
            None => self.buf.as_bytes(),
        }
    }

    /// The body decoded as text, replacing invalid UTF-8 sequences.
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(self.body())
    }
}

/// Byte offset of the first `\r\n\r\n` in `bytes`.
fn find_separator(bytes: &[u8]) -> Option<usize> {
    bytes.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Format the request line and headers, refusing anything over the framing
/// limit.
fn format_request(host: &str, path: &str) -> Result<String, PlatformError> {
    let request = format!("GET {path} HTTP/1.0\r\nHost: {host}\r\nConnection: close\r\n\r\n");
    if request.len() > MAX_REQUEST_LEN {
        return Err(PlatformError::SendFailed(format!(
            "request exceeds {MAX_REQUEST_LEN} bytes"
        )));
    }
    Ok(request)
}

/// Perform a blocking HTTP/1.0 GET against `host:port` and return the raw
/// response.
///
/// Resolution accepts whatever address family the resolver yields first;
/// exactly one candidate address is tried. The response is drained until the
/// peer closes the connection. The socket is released on every exit path.
pub fn get(host: &str, port: u16, path: &str) -> Result<HttpResponse, PlatformError> {
    let addr = (host, port)
        .to_socket_addrs()
        .map_err(|e| PlatformError::ResolutionFailed(e.to_string()))?
        .next()
        .ok_or_else(|| PlatformError::ResolutionFailed(format!("no addresses for {host}")))?;

    let mut stream =
        TcpStream::connect(addr).map_err(|e| PlatformError::ConnectionFailed(e.to_string()))?;

    let request = format_request(host, path)?;
    stream
        .write_all(request.as_bytes())
        .map_err(|e| PlatformError::SendFailed(e.to_string()))?;

    let mut buf = ResponseBuffer::new();
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buf.append(&chunk[..n])?,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            // A failed read ends the response the same way a close does;
            // whatever accumulated is the response.
            Err(_) => break,
        }
    }

    Ok(HttpResponse::new(buf))
}

/// Fetch `url` and return the response body as text.
///
/// The exposed operation of this module: parses the URL, performs the
/// HTTP/1.0 exchange on port 80, and strips the header block.
pub fn fetch(url: &str) -> Result<String, PlatformError> {
    let parsed = ParsedUrl::parse(url)?;
    let response = get(parsed.host(), HTTP_PORT, parsed.path())?;
    Ok(response.body_text().into_owned())
}
