//! Core library for `file_move`.
//!
//! Moves a file, or the (optionally extension-filtered) contents of a
//! directory tree, from a source path to a target path. Intended to run once
//! after a build finishes.
//!
//! ```no_run
//! use file_move::{MoveRequest, Mover, MoverOptions};
//!
//! let request = MoveRequest::new("dist/assets", "public/assets", Some(".js"))?;
//! let report = Mover::new(request, MoverOptions::default())?.execute();
//! assert!(report.outcome().succeeded);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod request;

pub use config::{default_config_path, path_has_symlink_ancestor, Config, LogLevel};
pub use errors::{MoveError, RequestError};
pub use fs_ops::{Mover, MoverOptions, MoveOutcome, MoveReport};
pub use request::{ExtensionFilter, MoveRequest};
