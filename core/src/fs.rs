//! Filesystem utilities exposed to the embedding environment.
//!
//! Synchronous, blocking wrappers over `std::fs` with one distinct error
//! variant per failure signal. Two operations deliberately never fail:
//! `file_exists` and `is_dir` answer `false` when the path cannot be
//! queried. Every handle is per-call and released on every exit path.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::PlatformError;

/// Read the entire contents of a file.
///
/// Contents are returned as raw bytes; embedded NULs survive.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, PlatformError> {
    fs::read(path).map_err(|e| PlatformError::OpenFailed(e.to_string()))
}

/// Write `data` to a file, creating or truncating it.
pub fn write_file(path: impl AsRef<Path>, data: &[u8]) -> Result<(), PlatformError> {
    fs::write(path, data).map_err(|e| PlatformError::OpenFailed(e.to_string()))
}

/// Copy a single file, streaming its contents.
///
/// The two open calls fail distinctly so the caller can tell a missing
/// source from an unwritable destination.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<(), PlatformError> {
    let mut from = File::open(src).map_err(|e| PlatformError::SourceOpenFailed(e.to_string()))?;
    let mut to = File::create(dst).map_err(|e| PlatformError::DestOpenFailed(e.to_string()))?;
    io::copy(&mut from, &mut to).map_err(|e| PlatformError::DestOpenFailed(e.to_string()))?;
    Ok(())
}

/// Create a symbolic link at `link` pointing to `target`.
#[cfg(unix)]
pub fn create_symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<(), PlatformError> {
    std::os::unix::fs::symlink(target, link).map_err(|e| PlatformError::LinkFailed(e.to_string()))
}

/// Create a symbolic link at `link` pointing to `target`.
#[cfg(windows)]
pub fn create_symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<(), PlatformError> {
    std::os::windows::fs::symlink_file(target, link)
        .map_err(|e| PlatformError::LinkFailed(e.to_string()))
}

/// Whether a path exists. Absence, or any stat failure, answers `false`.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// List the entry names of a directory.
///
/// `.` and `..` never appear. Order is whatever the underlying directory
/// stream yields — not sorted. Names are converted to text lossily.
pub fn list_dir(path: impl AsRef<Path>) -> Result<Vec<String>, PlatformError> {
    let entries = fs::read_dir(path).map_err(|e| PlatformError::OpenDirFailed(e.to_string()))?;
    Ok(entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect())
}

/// Create a single directory. The parent must already exist.
pub fn create_dir(path: impl AsRef<Path>) -> Result<(), PlatformError> {
    fs::create_dir(path).map_err(|e| PlatformError::MkdirFailed(e.to_string()))
}

/// Whether a path is a directory. Any stat failure answers `false`.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Whether a directory holds no entries besides `.` and `..`.
pub fn is_dir_empty(path: impl AsRef<Path>) -> Result<bool, PlatformError> {
    let entries = fs::read_dir(path).map_err(|e| PlatformError::OpenDirFailed(e.to_string()))?;
    Ok(entries.filter_map(Result::ok).next().is_none())
}

/// Recursively mirror the tree at `src` into a newly created `dst`.
///
/// Depth-first; each destination directory is created before its contents
/// are copied, and a mkdir collision (preexisting destination) is a hard
/// failure, never merged. Entries whose status query fails are skipped, as
/// are files that cannot be opened on either side; symlinked directories are
/// followed. A failed directory creation or subdirectory copy aborts with
/// `CopyFailed`.
pub fn copy_dir(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<(), PlatformError> {
    let src = src.as_ref();
    if !src.is_dir() {
        return Err(PlatformError::NotADirectory(src.display().to_string()));
    }
    copy_dir_recursive(src, dst.as_ref())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), PlatformError> {
    let entries = fs::read_dir(src).map_err(|e| PlatformError::CopyFailed(e.to_string()))?;
    fs::create_dir(dst).map_err(|e| PlatformError::CopyFailed(e.to_string()))?;

    for entry in entries.filter_map(Result::ok) {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        // Per-entry stat failure skips the entry rather than failing the walk.
        let meta = match fs::metadata(&src_path) {
            Ok(meta) => meta,
            Err(_) => continue,
        };

        if meta.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            let mut from = match File::open(&src_path) {
                Ok(file) => file,
                Err(_) => continue,
            };
            let mut to = match File::create(&dst_path) {
                Ok(file) => file,
                Err(_) => continue,
            };
            // A failed stream leaves a partial file, like a skipped entry.
            let _ = io::copy(&mut from, &mut to);
        }
    }

    Ok(())
}
