//! Filesystem operations: primitives, the recursive folder walk, dry-run
//! planning and the top-level `Mover`.

mod dir_move;
mod helpers;
mod mover;
mod outcome;
mod plan;
mod primitives;

pub use helpers::{describe_io_error, is_cross_device};
pub use mover::{Mover, MoverOptions};
pub use outcome::{MoveOutcome, MoveReport};
pub use plan::{plan_folder, PlannedAction, PlannedMove};
pub use primitives::{classify, ensure_dir, exists_at, list_dir, mkdir, move_file, EntryKind};
