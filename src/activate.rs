// src/activate.rs

//! Active-version symlink management.
//!
//! Exactly one symlink at the workspace root decides which installed
//! version is in effect. Activation is remove-then-create, not an
//! atomic swap; a crash between the two steps leaves no active link,
//! and re-running `activate` repairs it.

use crate::error::{Error, Result};
use crate::workspace::Workspace;
use std::fs;
use std::io;
use std::os::unix::fs as unix_fs;
use tracing::info;

/// Point the workspace's active link at `tag`'s built binaries.
///
/// The target worktree must have a `bin` directory (i.e. its build
/// completed); otherwise any pre-existing link is left untouched.
pub fn activate(workspace: &Workspace, tag: &str) -> Result<()> {
    let target = workspace.worktree_bin(tag);
    if !target.exists() {
        return Err(Error::NotBuilt(tag.to_string()));
    }

    let link = workspace.active_link();
    match fs::remove_file(&link) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(Error::IoError(format!(
                "failed to remove {}: {e}",
                link.display()
            )));
        }
    }

    unix_fs::symlink(&target, &link).map_err(|e| {
        Error::IoError(format!(
            "failed to link {} -> {}: {e}",
            link.display(),
            target.display()
        ))
    })?;

    info!("active version is now {}", tag);
    Ok(())
}
