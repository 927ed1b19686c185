//! Typed error definitions for file_move.
//! `MoveError` is the outcome taxonomy of the mover; `RequestError` covers
//! request validation before any filesystem access.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Source does not exist: {0}")]
    SourceNotFound(PathBuf),

    #[error("Failed to create target directory {path}: {detail}")]
    TargetCreationFailed { path: PathBuf, detail: String },

    #[error("Invalid target path (not a directory): {0}")]
    InvalidTargetPath(PathBuf),

    #[error("Target {target} lies inside source directory {src}")]
    TargetInsideSource { src: PathBuf, target: PathBuf },

    #[error("Failed to list directory {path}: {detail}")]
    ListingFailed { path: PathBuf, detail: String },

    #[error("Failed to move {src} -> {dst}: {detail}")]
    EntryMoveFailed {
        src: PathBuf,
        dst: PathBuf,
        detail: String,
    },

    #[error("Unrecognized entry (neither file nor directory): {0}")]
    UnrecognizedEntryKind(PathBuf),
}

impl MoveError {
    /// Stable tag used as the `kind` field in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::SourceNotFound(_) => "source_not_found",
            MoveError::TargetCreationFailed { .. } => "target_creation_failed",
            MoveError::InvalidTargetPath(_) => "invalid_target_path",
            MoveError::TargetInsideSource { .. } => "target_inside_source",
            MoveError::ListingFailed { .. } => "listing_failed",
            MoveError::EntryMoveFailed { .. } => "entry_move_failed",
            MoveError::UnrecognizedEntryKind(_) => "unrecognized_entry_kind",
        }
    }

    /// The path the failure is about (the source side for moves).
    pub fn path(&self) -> &Path {
        match self {
            MoveError::SourceNotFound(p)
            | MoveError::InvalidTargetPath(p)
            | MoveError::UnrecognizedEntryKind(p) => p,
            MoveError::TargetCreationFailed { path, .. } | MoveError::ListingFailed { path, .. } => {
                path
            }
            MoveError::TargetInsideSource { target, .. } => target,
            MoveError::EntryMoveFailed { src, .. } => src,
        }
    }

    /// True when the failure only affects a single entry and siblings carry on.
    pub fn is_isolated(&self) -> bool {
        matches!(
            self,
            MoveError::EntryMoveFailed { .. } | MoveError::UnrecognizedEntryKind(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("source_path must not be empty")]
    EmptySourcePath,

    #[error("target_path must not be empty")]
    EmptyTargetPath,

    #[error("invalid filter '{0}': expected an extension with a leading dot, e.g. '.js'")]
    InvalidFilter(String),
}
