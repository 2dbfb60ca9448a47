//! Host operating-system capabilities for an embedding scripting environment.
//!
//! # Overview
//! File I/O, directory traversal, symlink creation, and a minimal raw-socket
//! HTTP/1.0 client, exposed as plain synchronous functions with one typed
//! error enum. The C-ABI crate in this workspace translates these functions
//! into an envelope the embedding host consumes; this crate never touches a
//! host value representation.
//!
//! # Design
//! - The HTTP client speaks HTTP/1.0 with `Connection: close` and treats the
//!   peer closing the socket as the sole end-of-response signal — no
//!   Content-Length or chunked-encoding parsing.
//! - Responses accumulate in a `ResponseBuffer`, an owned growable byte store
//!   with an explicit length and a NUL sentinel after the contents.
//! - Every operation is blocking and self-contained: resources are allocated
//!   per call and released on every exit path, errors surface at the failing
//!   system call with a distinct `PlatformError` variant.

pub mod buffer;
pub mod error;
pub mod fs;
pub mod http;
pub mod url;

pub use buffer::ResponseBuffer;
pub use error::PlatformError;
pub use http::{fetch, HttpResponse};
pub use url::ParsedUrl;
