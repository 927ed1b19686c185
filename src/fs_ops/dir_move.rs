//! Recursive directory move.
//!
//! Every file move and every sub-folder walk is spawned into one rayon scope.
//! The scope only returns once all of them have finished, so the caller sees
//! the completed tree and the full list of failures. The pool size bounds how
//! many renames/listings are in flight at once.

use rayon::{Scope, ThreadPool};
use std::path::{Path, PathBuf};
use tracing::{debug, error, trace};

use crate::errors::MoveError;
use crate::request::MoveRequest;

use super::outcome::MoveReport;
use super::primitives::{classify, ensure_dir, list_dir, move_file, EntryKind};

pub(super) struct FolderWalk<'a> {
    request: &'a MoveRequest,
    report: &'a MoveReport,
}

impl<'a> FolderWalk<'a> {
    pub(super) fn new(request: &'a MoveRequest, report: &'a MoveReport) -> Self {
        Self { request, report }
    }

    /// Move the (filtered) contents of `src` into `dst`, recursively, and wait
    /// for every dispatched operation to finish.
    pub(super) fn run(&self, pool: &ThreadPool, src: &Path, dst: &Path) {
        let (src, dst) = (src.to_path_buf(), dst.to_path_buf());
        pool.scope(|s| self.folder(s, src, dst));
    }

    fn folder<'scope>(&'scope self, scope: &Scope<'scope>, src: PathBuf, dst: PathBuf) {
        match ensure_dir(&dst) {
            Ok(true) => {
                self.report.record_dir_created();
                debug!(path = %dst.display(), "Created target directory");
            }
            Ok(false) => {}
            Err(e) => return self.fail(e),
        }
        if classify(&dst) != Some(EntryKind::Directory) {
            return self.fail(MoveError::InvalidTargetPath(dst));
        }

        let entries = match list_dir(&src) {
            Ok(entries) => entries,
            Err(e) => return self.fail(e),
        };
        trace!(dir = %src.display(), entries = entries.len(), "Listed source directory");

        for (name, kind) in entries {
            let child_src = src.join(&name);
            let child_dst = dst.join(&name);
            match kind {
                EntryKind::Directory => {
                    scope.spawn(move |s| self.folder(s, child_src, child_dst));
                }
                EntryKind::File if !self.request.accepts_file(&name) => {
                    self.report.record_skipped();
                    trace!(path = %child_src.display(), "Skipped by filter");
                }
                EntryKind::File => {
                    scope.spawn(move |_| self.file(&child_src, &child_dst));
                }
                EntryKind::Other => self.fail(MoveError::UnrecognizedEntryKind(child_src)),
            }
        }
    }

    fn file(&self, src: &Path, dst: &Path) {
        match move_file(src, dst) {
            Ok(()) => {
                self.report.record_moved();
                debug!(src = %src.display(), dst = %dst.display(), "Moved file");
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&self, e: MoveError) {
        error!(kind = e.kind(), path = %e.path().display(), "{e}");
        self.report.record_failure(e);
    }
}
