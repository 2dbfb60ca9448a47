//! C-ABI wrapper around `platform-core`.
//!
//! # Overview
//! Exposes the platform operations — fetch, file I/O, directory handling —
//! through `extern "C"` functions so an embedding scripting host with a C
//! FFI can call them and raise the distinct error codes into its own
//! error-handling convention.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A single `FfiPlatformResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly; the two never-failing
//!   predicates (`platform_file_exists`, `platform_is_dir`) return plain
//!   booleans.
//! - The C caller owns every returned pointer and must release it with
//!   `platform_free_result` or `platform_free_string`.

pub mod types;

use std::ffi::CStr;
use std::ffi::CString;
use std::os::raw::c_char;
use std::panic::catch_unwind;
use std::path::PathBuf;

use types::*;

/// Decode a caller-provided path, replacing invalid UTF-8 sequences.
///
/// # Safety
/// `ptr` must be non-null and point to a NUL-terminated string.
unsafe fn path_arg(ptr: *const c_char) -> PathBuf {
    PathBuf::from(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// Fetch an `http://` URL and return the response body as text.
///
/// On success the result carries `data_tag = Text`.
/// The caller must free the result with `platform_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn platform_fetch(url: *const c_char) -> *mut FfiPlatformResult {
    catch_unwind(|| {
        if url.is_null() {
            return FfiPlatformResult::null_arg("url");
        }
        let url = unsafe { CStr::from_ptr(url) }.to_string_lossy().into_owned();
        match platform_core::fetch(&url) {
            Ok(body) => FfiPlatformResult::ok_text(body),
            Err(e) => FfiPlatformResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPlatformResult::panic("panic in platform_fetch"))
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// Read the full contents of a file.
///
/// On success the result carries `data_tag = Bytes`; embedded NULs survive.
#[unsafe(no_mangle)]
pub extern "C" fn platform_read_file(path: *const c_char) -> *mut FfiPlatformResult {
    catch_unwind(|| {
        if path.is_null() {
            return FfiPlatformResult::null_arg("path");
        }
        match platform_core::fs::read_file(unsafe { path_arg(path) }) {
            Ok(contents) => FfiPlatformResult::ok_bytes(contents),
            Err(e) => FfiPlatformResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPlatformResult::panic("panic in platform_read_file"))
}

/// Write `len` bytes from `data` to a file, creating or truncating it.
///
/// `data` may be null only when `len` is zero.
#[unsafe(no_mangle)]
pub extern "C" fn platform_write_file(
    path: *const c_char,
    data: *const u8,
    len: usize,
) -> *mut FfiPlatformResult {
    catch_unwind(|| {
        if path.is_null() {
            return FfiPlatformResult::null_arg("path");
        }
        if data.is_null() && len > 0 {
            return FfiPlatformResult::null_arg("data");
        }
        let contents = if len == 0 {
            &[][..]
        } else {
            unsafe { std::slice::from_raw_parts(data, len) }
        };
        match platform_core::fs::write_file(unsafe { path_arg(path) }, contents) {
            Ok(()) => FfiPlatformResult::ok_empty(),
            Err(e) => FfiPlatformResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPlatformResult::panic("panic in platform_write_file"))
}

/// Copy a single file.
#[unsafe(no_mangle)]
pub extern "C" fn platform_copy_file(
    src: *const c_char,
    dst: *const c_char,
) -> *mut FfiPlatformResult {
    catch_unwind(|| {
        if src.is_null() {
            return FfiPlatformResult::null_arg("src");
        }
        if dst.is_null() {
            return FfiPlatformResult::null_arg("dst");
        }
        match platform_core::fs::copy_file(unsafe { path_arg(src) }, unsafe { path_arg(dst) }) {
            Ok(()) => FfiPlatformResult::ok_empty(),
            Err(e) => FfiPlatformResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPlatformResult::panic("panic in platform_copy_file"))
}

/// Create a symbolic link at `link` pointing to `target`.
#[unsafe(no_mangle)]
pub extern "C" fn platform_create_symlink(
    target: *const c_char,
    link: *const c_char,
) -> *mut FfiPlatformResult {
    catch_unwind(|| {
        if target.is_null() {
            return FfiPlatformResult::null_arg("target");
        }
        if link.is_null() {
            return FfiPlatformResult::null_arg("link");
        }
        match platform_core::fs::create_symlink(unsafe { path_arg(target) }, unsafe {
            path_arg(link)
        }) {
            Ok(()) => FfiPlatformResult::ok_empty(),
            Err(e) => FfiPlatformResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPlatformResult::panic("panic in platform_create_symlink"))
}

/// Whether a path exists. Null or unqueryable paths answer `false`.
#[unsafe(no_mangle)]
pub extern "C" fn platform_file_exists(path: *const c_char) -> bool {
    catch_unwind(|| {
        if path.is_null() {
            return false;
        }
        platform_core::fs::file_exists(unsafe { path_arg(path) })
    })
    .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Directories
// ---------------------------------------------------------------------------

/// List the entry names of a directory, `.`/`..` excluded.
///
/// On success the result carries `data_tag = StringList`.
#[unsafe(no_mangle)]
pub extern "C" fn platform_list_dir(path: *const c_char) -> *mut FfiPlatformResult {
    catch_unwind(|| {
        if path.is_null() {
            return FfiPlatformResult::null_arg("path");
        }
        match platform_core::fs::list_dir(unsafe { path_arg(path) }) {
            Ok(names) => FfiPlatformResult::ok_string_list(names),
            Err(e) => FfiPlatformResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPlatformResult::panic("panic in platform_list_dir"))
}

/// Create a single directory. The parent must already exist.
#[unsafe(no_mangle)]
pub extern "C" fn platform_create_dir(path: *const c_char) -> *mut FfiPlatformResult {
    catch_unwind(|| {
        if path.is_null() {
            return FfiPlatformResult::null_arg("path");
        }
        match platform_core::fs::create_dir(unsafe { path_arg(path) }) {
            Ok(()) => FfiPlatformResult::ok_empty(),
            Err(e) => FfiPlatformResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPlatformResult::panic("panic in platform_create_dir"))
}

/// Whether a path is a directory. Null or unqueryable paths answer `false`.
#[unsafe(no_mangle)]
pub extern "C" fn platform_is_dir(path: *const c_char) -> bool {
    catch_unwind(|| {
        if path.is_null() {
            return false;
        }
        platform_core::fs::is_dir(unsafe { path_arg(path) })
    })
    .unwrap_or(false)
}

/// Whether a directory holds no entries besides `.` and `..`.
///
/// On success the result carries `data_tag = Bool`.
#[unsafe(no_mangle)]
pub extern "C" fn platform_is_dir_empty(path: *const c_char) -> *mut FfiPlatformResult {
    catch_unwind(|| {
        if path.is_null() {
            return FfiPlatformResult::null_arg("path");
        }
        match platform_core::fs::is_dir_empty(unsafe { path_arg(path) }) {
            Ok(empty) => FfiPlatformResult::ok_bool(empty),
            Err(e) => FfiPlatformResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPlatformResult::panic("panic in platform_is_dir_empty"))
}

/// Recursively mirror a directory tree into a newly created destination.
#[unsafe(no_mangle)]
pub extern "C" fn platform_copy_dir(
    src: *const c_char,
    dst: *const c_char,
) -> *mut FfiPlatformResult {
    catch_unwind(|| {
        if src.is_null() {
            return FfiPlatformResult::null_arg("src");
        }
        if dst.is_null() {
            return FfiPlatformResult::null_arg("dst");
        }
        match platform_core::fs::copy_dir(unsafe { path_arg(src) }, unsafe { path_arg(dst) }) {
            Ok(()) => FfiPlatformResult::ok_empty(),
            Err(e) => FfiPlatformResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiPlatformResult::panic("panic in platform_copy_dir"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiPlatformResult` returned by any fallible platform function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn platform_free_result(result: *mut FfiPlatformResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::None => {}
                FfiDataTag::Text => {
                    drop(unsafe { CString::from_raw(result.data as *mut c_char) });
                }
                FfiDataTag::Bytes => {
                    let bytes = unsafe { Box::from_raw(result.data as *mut FfiBytes) };
                    if !bytes.data.is_null() && bytes.len > 0 {
                        drop(unsafe { Vec::from_raw_parts(bytes.data, bytes.len, bytes.len) });
                    }
                }
                FfiDataTag::Bool => {
                    drop(unsafe { Box::from_raw(result.data as *mut bool) });
                }
                FfiDataTag::StringList => {
                    let list = unsafe { Box::from_raw(result.data as *mut FfiStringList) };
                    if !list.items.is_null() && list.len > 0 {
                        let items =
                            unsafe { Vec::from_raw_parts(list.items, list.len, list.len) };
                        for item in items {
                            if !item.is_null() {
                                drop(unsafe { CString::from_raw(item) });
                            }
                        }
                    }
                }
            }
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn platform_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn c_path(path: &std::path::Path) -> CString {
        CString::new(path.to_str().unwrap()).unwrap()
    }

    #[test]
    fn fetch_null_url_is_null_arg() {
        let result = platform_fetch(std::ptr::null());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::NullArg));
        assert!(!r.error_message.is_null());
        platform_free_result(result);
    }

    #[test]
    fn fetch_rejects_unsupported_scheme() {
        let url = CString::new("https://example.com/").unwrap();
        let result = platform_fetch(url.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::UnsupportedScheme));
        assert!(matches!(r.data_tag, FfiDataTag::None));
        let msg = unsafe { CStr::from_ptr(r.error_message) }.to_str().unwrap();
        assert!(msg.contains("http://"), "message: {msg}");
        platform_free_result(result);
    }

    #[test]
    fn write_then_read_roundtrips_through_the_c_surface() {
        let dir = tempfile::tempdir().unwrap();
        let path = c_path(&dir.path().join("data.bin"));
        let data = b"bytes \0 with \0 nuls";

        let result = platform_write_file(path.as_ptr(), data.as_ptr(), data.len());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert!(matches!(r.data_tag, FfiDataTag::None));
        platform_free_result(result);

        let result = platform_read_file(path.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert!(matches!(r.data_tag, FfiDataTag::Bytes));
        let bytes = unsafe { &*(r.data as *const FfiBytes) };
        let contents = unsafe { std::slice::from_raw_parts(bytes.data, bytes.len) };
        assert_eq!(contents, data);
        platform_free_result(result);
    }

    #[test]
    fn write_empty_contents_with_null_data_pointer() {
        let dir = tempfile::tempdir().unwrap();
        let path = c_path(&dir.path().join("empty.bin"));

        let result = platform_write_file(path.as_ptr(), std::ptr::null(), 0);
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        platform_free_result(result);

        let result = platform_read_file(path.as_ptr());
        let r = unsafe { &*result };
        let bytes = unsafe { &*(r.data as *const FfiBytes) };
        assert_eq!(bytes.len, 0);
        assert!(bytes.data.is_null());
        platform_free_result(result);
    }

    #[test]
    fn read_missing_file_maps_to_open_failed() {
        let dir = tempfile::tempdir().unwrap();
        let path = c_path(&dir.path().join("missing.txt"));

        let result = platform_read_file(path.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::OpenFailed));
        assert!(r.data.is_null());
        platform_free_result(result);
    }

    #[test]
    fn copy_file_missing_source_maps_to_source_open_failed() {
        let dir = tempfile::tempdir().unwrap();
        let src = c_path(&dir.path().join("absent"));
        let dst = c_path(&dir.path().join("dst"));

        let result = platform_copy_file(src.as_ptr(), dst.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::SourceOpenFailed));
        platform_free_result(result);
    }

    #[cfg(unix)]
    #[test]
    fn create_symlink_through_the_c_surface() {
        let dir = tempfile::tempdir().unwrap();
        let target_path = dir.path().join("target.txt");
        std::fs::write(&target_path, b"linked").unwrap();
        let target = c_path(&target_path);
        let link = c_path(&dir.path().join("link.txt"));

        let result = platform_create_symlink(target.as_ptr(), link.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        platform_free_result(result);

        assert!(platform_file_exists(link.as_ptr()));
    }

    #[test]
    fn file_exists_answers_false_for_null_and_missing() {
        assert!(!platform_file_exists(std::ptr::null()));

        let dir = tempfile::tempdir().unwrap();
        let path = c_path(&dir.path().join("nope"));
        assert!(!platform_file_exists(path.as_ptr()));
    }

    #[test]
    fn list_dir_returns_entry_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"").unwrap();
        std::fs::write(dir.path().join("b.txt"), b"").unwrap();
        let path = c_path(dir.path());

        let result = platform_list_dir(path.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert!(matches!(r.data_tag, FfiDataTag::StringList));

        let list = unsafe { &*(r.data as *const FfiStringList) };
        assert_eq!(list.len, 2);
        let items = unsafe { std::slice::from_raw_parts(list.items, list.len) };
        let mut names: Vec<&str> = items
            .iter()
            .map(|&item| unsafe { CStr::from_ptr(item) }.to_str().unwrap())
            .collect();
        names.sort_unstable();
        assert_eq!(names, ["a.txt", "b.txt"]);

        platform_free_result(result);
    }

    #[test]
    fn list_dir_missing_path_maps_to_open_dir_failed() {
        let dir = tempfile::tempdir().unwrap();
        let path = c_path(&dir.path().join("absent"));

        let result = platform_list_dir(path.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::OpenDirFailed));
        platform_free_result(result);
    }

    #[test]
    fn create_dir_then_is_dir_and_emptiness() {
        let dir = tempfile::tempdir().unwrap();
        let path = c_path(&dir.path().join("fresh"));

        let result = platform_create_dir(path.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        platform_free_result(result);

        assert!(platform_is_dir(path.as_ptr()));

        let result = platform_is_dir_empty(path.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        assert!(matches!(r.data_tag, FfiDataTag::Bool));
        assert!(unsafe { *(r.data as *const bool) });
        platform_free_result(result);
    }

    #[test]
    fn copy_dir_from_file_maps_to_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let src_path = dir.path().join("plain.txt");
        std::fs::write(&src_path, b"x").unwrap();
        let src = c_path(&src_path);
        let dst = c_path(&dir.path().join("dst"));

        let result = platform_copy_dir(src.as_ptr(), dst.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::NotADirectory));
        platform_free_result(result);
    }

    #[test]
    fn copy_dir_mirrors_tree_through_the_c_surface() {
        let dir = tempfile::tempdir().unwrap();
        let src_path = dir.path().join("src");
        std::fs::create_dir(&src_path).unwrap();
        std::fs::write(src_path.join("f.txt"), b"payload").unwrap();
        let src = c_path(&src_path);
        let dst_path = dir.path().join("dst");
        let dst = c_path(&dst_path);

        let result = platform_copy_dir(src.as_ptr(), dst.as_ptr());
        let r = unsafe { &*result };
        assert!(matches!(r.error_code, FfiErrorCode::Ok));
        platform_free_result(result);

        assert_eq!(std::fs::read(dst_path.join("f.txt")).unwrap(), b"payload");
    }

    #[test]
    fn free_result_null_is_safe() {
        platform_free_result(std::ptr::null_mut());
    }

    #[test]
    fn free_string_null_is_safe() {
        platform_free_string(std::ptr::null_mut());
    }
}
