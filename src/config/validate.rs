//! Path relationship checks run before a directory move.

use std::path::{Path, PathBuf};

use crate::errors::MoveError;

/// Reject a target equal to, or nested inside, the source directory.
///
/// Paths are resolved with `dunce::canonicalize` so symlinked or relative
/// spellings compare correctly. A target that does not exist yet is resolved
/// through its parent.
pub fn ensure_target_outside_source(src: &Path, target: &Path) -> Result<(), MoveError> {
    let src_real = resolve(src);
    let target_real = resolve(target);

    if target_real.starts_with(&src_real) {
        return Err(MoveError::TargetInsideSource {
            src: src.to_path_buf(),
            target: target.to_path_buf(),
        });
    }
    Ok(())
}

fn resolve(path: &Path) -> PathBuf {
    if let Ok(real) = dunce::canonicalize(path) {
        return real;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            dunce::canonicalize(parent)
                .map(|p| p.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}
