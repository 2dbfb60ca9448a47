//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each payload a core operation can produce gets a C-compatible shape:
//! text as `char*`, raw file contents as pointer + length, directory
//! listings as an array of `char*`. A single `FfiPlatformResult` envelope
//! with `FfiDataTag` + `void* data` conveys success payloads and errors
//! uniformly. Constructor helpers live here to keep `lib.rs` focused on the
//! `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use platform_core::PlatformError;

/// Error codes returned in `FfiPlatformResult`. `Ok` plus one code per core
/// error variant, with `Panic` and `NullArg` for boundary failures.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    UnsupportedScheme = 1,
    ResolutionFailed = 2,
    ConnectionFailed = 3,
    SendFailed = 4,
    OutOfMemory = 5,
    OpenFailed = 6,
    SourceOpenFailed = 7,
    DestOpenFailed = 8,
    LinkFailed = 9,
    OpenDirFailed = 10,
    MkdirFailed = 11,
    NotADirectory = 12,
    CopyFailed = 13,
    Panic = 14,
    NullArg = 15,
}

/// Tag that tells `platform_free_result` what `FfiPlatformResult::data`
/// points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    Text = 1,
    Bytes = 2,
    Bool = 3,
    StringList = 4,
}

/// Raw byte contents exposed to C: pointer plus length, NUL-safe.
#[repr(C)]
pub struct FfiBytes {
    pub data: *mut u8,
    pub len: usize,
}

/// Directory entry names exposed to C.
#[repr(C)]
pub struct FfiStringList {
    pub items: *mut *mut c_char,
    pub len: usize,
}

/// Result envelope for all fallible operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the payload described by `data_tag` (null for `None`).
/// On failure `error_code` names the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiPlatformResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiPlatformResult {
    /// Build a success result with no payload (write, copy, mkdir, link).
    pub(crate) fn ok_empty() -> *mut Self {
        let result = Box::new(FfiPlatformResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying text (the fetch body).
    pub(crate) fn ok_text(text: String) -> *mut Self {
        let text = CString::new(text).unwrap().into_raw();
        let result = Box::new(FfiPlatformResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            data_tag: FfiDataTag::Text,
            data: text as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying raw bytes (file contents).
    pub(crate) fn ok_bytes(bytes: Vec<u8>) -> *mut Self {
        let mut bytes = bytes.into_boxed_slice();
        let len = bytes.len();
        let data = if len == 0 {
            std::ptr::null_mut()
        } else {
            let ptr = bytes.as_mut_ptr();
            std::mem::forget(bytes);
            ptr
        };

        let payload = Box::new(FfiBytes { data, len });
        let result = Box::new(FfiPlatformResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            data_tag: FfiDataTag::Bytes,
            data: Box::into_raw(payload) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying a boolean answer.
    pub(crate) fn ok_bool(value: bool) -> *mut Self {
        let result = Box::new(FfiPlatformResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            data_tag: FfiDataTag::Bool,
            data: Box::into_raw(Box::new(value)) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying directory entry names.
    pub(crate) fn ok_string_list(names: Vec<String>) -> *mut Self {
        let len = names.len();
        let mut items: Box<[*mut c_char]> = names
            .into_iter()
            .map(|name| CString::new(name).unwrap().into_raw())
            .collect();

        let items_ptr = if items.is_empty() {
            std::ptr::null_mut()
        } else {
            let ptr = items.as_mut_ptr();
            std::mem::forget(items);
            ptr
        };

        let payload = Box::new(FfiStringList {
            items: items_ptr,
            len,
        });
        let result = Box::new(FfiPlatformResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            data_tag: FfiDataTag::StringList,
            data: Box::into_raw(payload) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build an error result from a `PlatformError`.
    pub(crate) fn from_error(err: PlatformError) -> *mut Self {
        let error_code = match &err {
            PlatformError::UnsupportedScheme => FfiErrorCode::UnsupportedScheme,
            PlatformError::ResolutionFailed(_) => FfiErrorCode::ResolutionFailed,
            PlatformError::ConnectionFailed(_) => FfiErrorCode::ConnectionFailed,
            PlatformError::SendFailed(_) => FfiErrorCode::SendFailed,
            PlatformError::OutOfMemory => FfiErrorCode::OutOfMemory,
            PlatformError::OpenFailed(_) => FfiErrorCode::OpenFailed,
            PlatformError::SourceOpenFailed(_) => FfiErrorCode::SourceOpenFailed,
            PlatformError::DestOpenFailed(_) => FfiErrorCode::DestOpenFailed,
            PlatformError::LinkFailed(_) => FfiErrorCode::LinkFailed,
            PlatformError::OpenDirFailed(_) => FfiErrorCode::OpenDirFailed,
            PlatformError::MkdirFailed(_) => FfiErrorCode::MkdirFailed,
            PlatformError::NotADirectory(_) => FfiErrorCode::NotADirectory,
            PlatformError::CopyFailed(_) => FfiErrorCode::CopyFailed,
        };

        let result = Box::new(FfiPlatformResult {
            error_code,
            error_message: CString::new(err.to_string()).unwrap().into_raw(),
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        let msg = format!("null argument: {name}");
        let result = Box::new(FfiPlatformResult {
            error_code: FfiErrorCode::NullArg,
            error_message: CString::new(msg).unwrap().into_raw(),
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        let result = Box::new(FfiPlatformResult {
            error_code: FfiErrorCode::Panic,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }
}
