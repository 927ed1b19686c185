//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::RequestError;
use crate::request::MoveRequest;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// Per-entry detail
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// File or directory to move from
    pub source_path: PathBuf,
    /// Destination file (file source) or directory (directory source)
    pub target_path: PathBuf,
    /// Extension with leading dot; empty means no filtering
    pub filter: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, report what would move but do not modify the filesystem
    pub dry_run: bool,
    /// Upper bound on concurrent filesystem operations; None = CPU count
    pub max_concurrency: Option<NonZeroUsize>,
    /// Exit non-zero when any move failed
    pub fail_on_error: bool,
}

impl Config {
    /// Construct a Config with explicit paths; other fields use defaults.
    pub fn new(source_path: impl Into<PathBuf>, target_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            target_path: target_path.into(),
            ..Default::default()
        }
    }

    /// Validate the move-related fields and freeze them into a request.
    pub fn to_request(&self) -> Result<MoveRequest, RequestError> {
        let filter = if self.filter.is_empty() {
            None
        } else {
            Some(self.filter.as_str())
        };
        MoveRequest::new(&self.source_path, &self.target_path, filter)
    }
}
