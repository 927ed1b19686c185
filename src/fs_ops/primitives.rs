//! Filesystem primitives used by the mover.
//! Each returns a `Result<_, MoveError>` outcome; nothing here panics or logs.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::errors::MoveError;

use super::helpers::{describe_io_error, is_cross_device};

/// Three-way classification of a filesystem entry (symlinks are not followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlink, fifo, socket, device.
    Other,
}

impl EntryKind {
    pub fn of(ft: fs::FileType) -> Self {
        if ft.is_file() {
            EntryKind::File
        } else if ft.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}

/// True if any entry exists at `path`, dangling symlinks included.
pub fn exists_at(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Classify `path` without following symlinks. None if nothing is there.
pub fn classify(path: &Path) -> Option<EntryKind> {
    fs::symlink_metadata(path)
        .ok()
        .map(|m| EntryKind::of(m.file_type()))
}

/// Create exactly one directory level.
pub fn mkdir(path: &Path) -> Result<(), MoveError> {
    fs::create_dir(path).map_err(|e| MoveError::TargetCreationFailed {
        path: path.to_path_buf(),
        detail: describe_io_error("create directory", path, &e),
    })
}

/// Existence check then single-level `mkdir`. Returns true if it created `path`.
///
/// Losing a creation race to another worker is not an error as long as a
/// directory ends up at `path`.
pub fn ensure_dir(path: &Path) -> Result<bool, MoveError> {
    if exists_at(path) {
        return Ok(false);
    }
    match mkdir(path) {
        Ok(()) => Ok(true),
        Err(_) if classify(path) == Some(EntryKind::Directory) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Rename `src` to `dst`. Plain rename semantics: an existing file at `dst`
/// is replaced, a directory at `dst` or a device boundary is a failure.
pub fn move_file(src: &Path, dst: &Path) -> Result<(), MoveError> {
    fs::rename(src, dst).map_err(|e| {
        let op = if is_cross_device(&e) {
            "rename across devices"
        } else {
            "rename"
        };
        MoveError::EntryMoveFailed {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            detail: describe_io_error(op, src, &e),
        }
    })
}

/// Snapshot the names and kinds of a directory's entries.
///
/// The listing is collected up front so the directory handle is closed before
/// any child is processed. An entry that vanishes between listing and stat is
/// dropped.
pub fn list_dir(dir: &Path) -> Result<Vec<(OsString, EntryKind)>, MoveError> {
    let listing_failed = |e: std::io::Error| MoveError::ListingFailed {
        path: dir.to_path_buf(),
        detail: describe_io_error("read directory", dir, &e),
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(listing_failed)? {
        let entry = entry.map_err(listing_failed)?;
        // DirEntry::file_type does not follow symlinks.
        if let Ok(ft) = entry.file_type() {
            entries.push((entry.file_name(), EntryKind::of(ft)));
        }
    }
    Ok(entries)
}
