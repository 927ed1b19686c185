use anyhow::{Context, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{debug, error, info};

use crate::config::{ensure_target_outside_source, Config};
use crate::errors::MoveError;
use crate::request::MoveRequest;

use super::dir_move::FolderWalk;
use super::outcome::{MoveOutcome, MoveReport};
use super::plan::{plan_folder, PlannedAction};
use super::primitives::{classify, exists_at, mkdir, move_file, EntryKind};

/// Execution knobs that are not part of the request itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoverOptions {
    /// Validate and plan, but do not modify the filesystem.
    pub dry_run: bool,
    /// Worker threads for the directory walk; None = rayon default (CPU count).
    pub max_concurrency: Option<NonZeroUsize>,
}

/// Moves one request's source to its target.
///
/// Owns the worker pool used for directory walks; construct once per
/// invocation and call [`Mover::execute`].
pub struct Mover {
    request: MoveRequest,
    options: MoverOptions,
    pool: ThreadPool,
}

impl Mover {
    pub fn new(request: MoveRequest, options: MoverOptions) -> Result<Self> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("file-move-{i}"));
        if let Some(n) = options.max_concurrency {
            builder = builder.num_threads(n.get());
        }
        let pool = builder.build().context("build move worker pool")?;
        Ok(Self {
            request,
            options,
            pool,
        })
    }

    /// Validate `cfg` into a request and build a mover from it.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let request = cfg.to_request().context("invalid move configuration")?;
        Self::new(
            request,
            MoverOptions {
                dry_run: cfg.dry_run,
                max_concurrency: cfg.max_concurrency,
            },
        )
    }

    pub fn request(&self) -> &MoveRequest {
        &self.request
    }

    pub fn options(&self) -> &MoverOptions {
        &self.options
    }

    /// Run the move once. Every failure is logged where it happens and
    /// collected in the returned report; nothing is propagated as an error.
    pub fn execute(&self) -> MoveReport {
        let report = MoveReport::new(self.options.dry_run);
        let src = self.request.source_path();
        let target = self.request.target_path();
        info!(
            src = %src.display(),
            target = %target.display(),
            filter = self.request.extension_filter().map(|f| f.as_str()).unwrap_or(""),
            dry_run = self.options.dry_run,
            "Starting move"
        );

        if let Err(e) = self.dispatch(&report) {
            error!(kind = e.kind(), path = %e.path().display(), "{e}");
            report.record_failure(e);
        }

        if report.is_success() {
            info!(
                moved = report.files_moved(),
                skipped = report.files_skipped(),
                dirs_created = report.dirs_created(),
                dry_run = report.is_dry_run(),
                "Move completed"
            );
        } else {
            error!(
                failures = report.failures().len(),
                moved = report.files_moved(),
                skipped = report.files_skipped(),
                "Move finished with failures"
            );
        }
        report
    }

    /// Move the (filtered) contents of `src_dir` into `dst_dir`, recursively.
    ///
    /// Returns after every nested move has completed; the outcome aggregates
    /// all failures in the subtree.
    pub fn move_folder(&self, src_dir: &Path, dst_dir: &Path) -> MoveOutcome {
        let report = MoveReport::new(false);
        FolderWalk::new(&self.request, &report).run(&self.pool, src_dir, dst_dir);
        report.outcome()
    }

    fn dispatch(&self, report: &MoveReport) -> Result<(), MoveError> {
        let src = self.request.source_path();
        if !exists_at(src) {
            return Err(MoveError::SourceNotFound(src.to_path_buf()));
        }

        match classify(src) {
            Some(EntryKind::File) => self.single_file(report),
            Some(EntryKind::Directory) => self.directory(report),
            Some(EntryKind::Other) => Err(MoveError::UnrecognizedEntryKind(src.to_path_buf())),
            // Vanished between the two stats.
            None => Err(MoveError::SourceNotFound(src.to_path_buf())),
        }
    }

    /// A file source moves to the target path literally (rename, not "into").
    fn single_file(&self, report: &MoveReport) -> Result<(), MoveError> {
        let src = self.request.source_path();
        let target = self.request.target_path();
        if self.options.dry_run {
            check_file_target(src, target)?;
            info!(src = %src.display(), dst = %target.display(), "dry-run: would move file");
        } else {
            move_file(src, target)?;
            info!(src = %src.display(), dst = %target.display(), "Moved file");
        }
        report.record_moved();
        Ok(())
    }

    fn directory(&self, report: &MoveReport) -> Result<(), MoveError> {
        let src = self.request.source_path();
        let target = self.request.target_path();

        let target_exists = exists_at(target);
        if target_exists && classify(target) != Some(EntryKind::Directory) {
            return Err(MoveError::InvalidTargetPath(target.to_path_buf()));
        }
        ensure_target_outside_source(src, target)?;

        if !target_exists {
            if self.options.dry_run {
                ensure_parent_is_dir(target)?;
            } else {
                info!(path = %target.display(), "Target directory does not exist, creating it");
                mkdir(target)?;
                report.record_dir_created();
            }
        }

        if self.options.dry_run {
            for planned in plan_folder(&self.request, src, target, report) {
                match planned.action {
                    PlannedAction::CreateDir => {
                        info!(action = "mkdir", dst = %planned.dst.display(), "dry-run: would create directory")
                    }
                    PlannedAction::MoveFile => {
                        info!(src = %planned.src.display(), dst = %planned.dst.display(), "dry-run: would move file")
                    }
                }
            }
            return Ok(());
        }

        debug!(threads = self.pool.current_num_threads(), "Walking source directory");
        FolderWalk::new(&self.request, report).run(&self.pool, src, target);
        Ok(())
    }
}

fn parent_is_dir(path: &Path) -> bool {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent.is_dir(),
        None => true,
    }
}

/// Dry-run stand-in for the single-level `mkdir`: the parent must already be a directory.
fn ensure_parent_is_dir(target: &Path) -> Result<(), MoveError> {
    if parent_is_dir(target) {
        Ok(())
    } else {
        Err(MoveError::TargetCreationFailed {
            path: target.to_path_buf(),
            detail: "parent directory does not exist (only one level is created)".into(),
        })
    }
}

/// Dry-run stand-in for the rename of a file source: reject the targets `rename` would.
fn check_file_target(src: &Path, target: &Path) -> Result<(), MoveError> {
    let detail = if classify(target) == Some(EntryKind::Directory) {
        format!("target '{}' is an existing directory", target.display())
    } else if !parent_is_dir(target) {
        format!("parent directory of '{}' does not exist", target.display())
    } else {
        return Ok(());
    };
    Err(MoveError::EntryMoveFailed {
        src: src.to_path_buf(),
        dst: target.to_path_buf(),
        detail,
    })
}
