//! Error types for the platform module.
//!
//! # Design
//! Every failing system call maps to its own variant so the binding layer can
//! surface a precise failure to the embedding environment — there is no
//! generic catch-all. Variants carry the underlying OS error text where one
//! exists. The two documented exceptions to fail-loud behavior live in `fs`:
//! `file_exists` and `is_dir` answer `false` instead of failing on a missing
//! path.

use std::fmt;

/// Errors returned by the HTTP client and the filesystem utilities.
#[derive(Debug)]
pub enum PlatformError {
    /// The URL does not start with the literal prefix `http://`.
    UnsupportedScheme,

    /// Host name resolution produced no usable address.
    ResolutionFailed(String),

    /// The TCP connection to the resolved address could not be established.
    ConnectionFailed(String),

    /// The request could not be written in full, or exceeded the framing
    /// buffer limit before being written at all.
    SendFailed(String),

    /// Growing the response buffer failed.
    OutOfMemory,

    /// A file could not be opened for reading or writing.
    OpenFailed(String),

    /// The source file of a copy could not be opened.
    SourceOpenFailed(String),

    /// The destination file of a copy could not be opened.
    DestOpenFailed(String),

    /// The symbolic link could not be created.
    LinkFailed(String),

    /// A directory could not be opened for enumeration.
    OpenDirFailed(String),

    /// A directory could not be created.
    MkdirFailed(String),

    /// The source of a directory copy is not a directory.
    NotADirectory(String),

    /// A recursive directory copy failed while creating a directory or
    /// copying a subdirectory.
    CopyFailed(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::UnsupportedScheme => {
                write!(f, "only http:// URLs are supported")
            }
            PlatformError::ResolutionFailed(msg) => {
                write!(f, "host resolution failed: {msg}")
            }
            PlatformError::ConnectionFailed(msg) => {
                write!(f, "connection failed: {msg}")
            }
            PlatformError::SendFailed(msg) => {
                write!(f, "sending request failed: {msg}")
            }
            PlatformError::OutOfMemory => {
                write!(f, "out of memory while buffering response")
            }
            PlatformError::OpenFailed(msg) => {
                write!(f, "could not open file: {msg}")
            }
            PlatformError::SourceOpenFailed(msg) => {
                write!(f, "could not open source file: {msg}")
            }
            PlatformError::DestOpenFailed(msg) => {
                write!(f, "could not open destination file: {msg}")
            }
            PlatformError::LinkFailed(msg) => {
                write!(f, "failed to create symlink: {msg}")
            }
            PlatformError::OpenDirFailed(msg) => {
                write!(f, "could not open directory: {msg}")
            }
            PlatformError::MkdirFailed(msg) => {
                write!(f, "failed to create directory: {msg}")
            }
            PlatformError::NotADirectory(path) => {
                write!(f, "not a directory: {path}")
            }
            PlatformError::CopyFailed(msg) => {
                write!(f, "failed to copy directory: {msg}")
            }
        }
    }
}

impl std::error::Error for PlatformError {}
