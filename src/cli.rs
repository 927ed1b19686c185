//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - `--source-path`/`--target-path` take precedence over the positionals.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Move build output from a source path to a target path.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move files (optionally filtered by extension) from a source to a target path after a build"
)]
pub struct Args {
    /// File or directory to move from.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::AnyPath)]
    pub source_pos: Option<PathBuf>,

    /// Destination file (file source) or directory (directory source).
    #[arg(value_name = "TARGET", value_hint = ValueHint::AnyPath)]
    pub target_pos: Option<PathBuf>,

    #[arg(
        long = "source-path",
        short = 's',
        value_name = "PATH",
        value_hint = ValueHint::AnyPath,
        help = "Source path (overrides positional SOURCE)"
    )]
    pub source_path: Option<PathBuf>,

    #[arg(
        long = "target-path",
        short = 't',
        value_name = "PATH",
        value_hint = ValueHint::AnyPath,
        help = "Target path (overrides positional TARGET)"
    )]
    pub target_path: Option<PathBuf>,

    /// Only move files with this extension, leading dot included (e.g. `.js`).
    #[arg(short = 'f', long, value_name = "EXT")]
    pub filter: Option<String>,

    /// Explicit XML config file (otherwise $FILE_MOVE_CONFIG or the OS default).
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath, help = "Also append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    #[arg(
        long,
        help = "Show what would be moved, but do not modify files/directories"
    )]
    pub dry_run: bool,

    #[arg(
        short = 'j',
        long,
        value_name = "N",
        help = "Maximum concurrent filesystem operations (default: number of CPUs)"
    )]
    pub max_concurrency: Option<NonZeroUsize>,

    #[arg(long, help = "Exit with status 1 if any move failed")]
    pub fail_on_error: bool,

    #[arg(long, help = "Print the config file location used by file_move and exit")]
    pub print_config: bool,

    #[arg(long, help = "Write a template config file (if none exists) and exit")]
    pub init_config: bool,
}

impl Args {
    /// Effective source path: `--source-path` if provided, else positional SOURCE.
    pub fn resolved_source(&self) -> Option<PathBuf> {
        self.source_path.clone().or_else(|| self.source_pos.clone())
    }

    /// Effective target path: `--target-path` if provided, else positional TARGET.
    pub fn resolved_target(&self) -> Option<PathBuf> {
        self.target_path.clone().or_else(|| self.target_pos.clone())
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(src) = self.resolved_source() {
            cfg.source_path = src;
        }
        if let Some(target) = self.resolved_target() {
            cfg.target_path = target;
        }
        if let Some(filter) = &self.filter {
            cfg.filter = filter.trim().to_string();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if let Some(n) = self.max_concurrency {
            cfg.max_concurrency = Some(n);
        }
        if self.fail_on_error {
            cfg.fail_on_error = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
