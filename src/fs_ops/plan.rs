//! Dry-run planning: what a directory move would do, without touching anything.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::MoveError;
use crate::request::MoveRequest;

use super::helpers::describe_io_error;
use super::outcome::MoveReport;
use super::primitives::{classify, EntryKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedAction {
    CreateDir,
    MoveFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub action: PlannedAction,
    pub src: PathBuf,
    pub dst: PathBuf,
}

/// Plan the move of `src_dir` into `dst_dir`, in file-name order.
///
/// Mirrors the real walk: directories are always descended, files go through
/// the request's filter, anything else is recorded as unrecognized. Counters
/// on `report` are updated as if the plan had run.
pub fn plan_folder(
    request: &MoveRequest,
    src_dir: &Path,
    dst_dir: &Path,
    report: &MoveReport,
) -> Vec<PlannedMove> {
    let mut plan = Vec::new();
    let mut it = WalkDir::new(src_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(next) = it.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(src_dir).to_path_buf();
                let detail = match e.io_error() {
                    Some(io) => describe_io_error("read directory", &path, io),
                    None => e.to_string(),
                };
                report.record_failure(MoveError::ListingFailed { path, detail });
                continue;
            }
        };

        let rel = entry.path().strip_prefix(src_dir).unwrap_or(Path::new(""));
        let dst = if rel.as_os_str().is_empty() {
            dst_dir.to_path_buf()
        } else {
            dst_dir.join(rel)
        };

        match EntryKind::of(entry.file_type()) {
            EntryKind::Directory => match classify(&dst) {
                None => {
                    report.record_dir_created();
                    plan.push(PlannedMove {
                        action: PlannedAction::CreateDir,
                        src: entry.path().to_path_buf(),
                        dst,
                    });
                }
                Some(EntryKind::Directory) => {}
                Some(_) => {
                    report.record_failure(MoveError::InvalidTargetPath(dst));
                    if entry.depth() > 0 {
                        it.skip_current_dir();
                    }
                }
            },
            EntryKind::File if !request.accepts_file(entry.file_name()) => {
                report.record_skipped();
            }
            EntryKind::File => {
                report.record_moved();
                plan.push(PlannedMove {
                    action: PlannedAction::MoveFile,
                    src: entry.path().to_path_buf(),
                    dst,
                });
            }
            EntryKind::Other => {
                report.record_failure(MoveError::UnrecognizedEntryKind(entry.path().to_path_buf()));
            }
        }
    }
    plan
}
