// src/workspace.rs

//! Workspace layout rooted at an explicit base directory.
//!
//! Everything gover owns lives under one base path: the shared bare
//! repository, the bootstrap toolchain, one worktree per installed
//! version, and the `bin` symlink selecting the active one. The base
//! path is an explicit configuration value threaded into every
//! component; nothing reads it from ambient state.

use crate::error::{Error, Result};
use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};

/// Bare clone of the upstream repository.
const BARE_REPO_DIR: &str = ".bare";

/// Verified binary release used to bootstrap source builds.
const BOOTSTRAP_DIR: &str = ".bootstrap";

/// The active-version symlink at the workspace root.
const ACTIVE_LINK: &str = "bin";

#[derive(Debug, Clone)]
pub struct Workspace {
    base_dir: PathBuf,
}

impl Workspace {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Default base path, `.gover` under the user's home directory.
    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".gover"))
            .ok_or_else(|| Error::IoError("unable to determine home directory".to_string()))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn repo_dir(&self) -> PathBuf {
        self.base_dir.join(BARE_REPO_DIR)
    }

    pub fn bootstrap_dir(&self) -> PathBuf {
        self.base_dir.join(BOOTSTRAP_DIR)
    }

    /// Worktree checkout for a version tag.
    pub fn worktree_dir(&self, tag: &str) -> PathBuf {
        self.base_dir.join(tag)
    }

    /// Built binaries of a version's worktree.
    pub fn worktree_bin(&self, tag: &str) -> PathBuf {
        self.worktree_dir(tag).join("bin")
    }

    pub fn active_link(&self) -> PathBuf {
        self.base_dir.join(ACTIVE_LINK)
    }

    /// Create the base directory, restricted to the owner. Idempotent;
    /// an existing directory keeps its permissions.
    pub fn create(&self) -> Result<()> {
        DirBuilder::new()
            .recursive(true)
            .mode(0o700)
            .create(&self.base_dir)
            .map_err(|e| {
                Error::IoError(format!("failed to create {}: {e}", self.base_dir.display()))
            })
    }
}
