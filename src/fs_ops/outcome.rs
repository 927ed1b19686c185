//! Outcome values and the aggregated per-invocation report.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::MoveError;

/// Flattened success flag plus human-readable detail.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub succeeded: bool,
    pub error_detail: Option<String>,
}

impl MoveOutcome {
    pub fn success() -> Self {
        Self {
            succeeded: true,
            error_detail: None,
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            error_detail: Some(detail.into()),
        }
    }
}

impl From<Result<(), MoveError>> for MoveOutcome {
    fn from(r: Result<(), MoveError>) -> Self {
        match r {
            Ok(()) => Self::success(),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

/// Counters and failures collected across the whole tree walk.
///
/// Updated concurrently by pool workers; read once the walk has joined.
#[derive(Debug, Default)]
pub struct MoveReport {
    dry_run: bool,
    files_moved: AtomicUsize,
    files_skipped: AtomicUsize,
    dirs_created: AtomicUsize,
    failures: Mutex<Vec<MoveError>>,
}

impl MoveReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub(crate) fn record_moved(&self) {
        self.files_moved.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_skipped(&self) {
        self.files_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_dir_created(&self) {
        self.dirs_created.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failure(&self, err: MoveError) {
        // A poisoned lock still holds valid data; keep collecting.
        let mut failures = self.failures.lock().unwrap_or_else(|p| p.into_inner());
        failures.push(err);
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Files moved (or, in a dry run, files that would be moved).
    pub fn files_moved(&self) -> usize {
        self.files_moved.load(Ordering::Relaxed)
    }

    /// Files left in place because the extension filter did not match.
    pub fn files_skipped(&self) -> usize {
        self.files_skipped.load(Ordering::Relaxed)
    }

    /// Target directories created (or that would be created).
    pub fn dirs_created(&self) -> usize {
        self.dirs_created.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> Vec<MoveError> {
        self.failures
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    pub fn is_success(&self) -> bool {
        self.failures
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .is_empty()
    }

    /// Collapse the report into a single outcome; details are joined with "; ".
    pub fn outcome(&self) -> MoveOutcome {
        let failures = self.failures();
        if failures.is_empty() {
            return MoveOutcome::success();
        }
        let detail = failures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        MoveOutcome::failure(detail)
    }
}
