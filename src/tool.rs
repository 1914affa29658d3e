// src/tool.rs

//! External process seam.
//!
//! The version-control client and the Go build script are opaque
//! external programs with known invocation contracts. Core logic only
//! sees this narrow capability trait, so tests can substitute a
//! recording fake and never spawn a process.

use crate::error::{Error, Result};
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Name of the external version-control client.
pub const GIT: &str = "git";

/// Build script run inside a worktree's `src` directory.
const BUILD_SCRIPT: &str = "./make.bash";

/// Synchronous access to the external tools gover drives.
///
/// Both operations run the child to completion with stdout/stderr
/// inherited, so tool output reaches the invoking terminal unmodified.
pub trait ToolRunner {
    /// Run the version-control client with `args`.
    fn run_version_control(&self, args: &[&str]) -> Result<()>;

    /// Run the build script in `work_dir` with extra environment `env`.
    fn run_build(&self, work_dir: &Path, env: &[(&str, String)]) -> Result<()>;
}

/// Spawns the real tools as child processes.
pub struct SystemRunner;

impl SystemRunner {
    /// Check that the version-control client is installed before any
    /// operation that needs it.
    pub fn preflight() -> Result<()> {
        which::which(GIT).map_err(|_| Error::ToolNotFound(GIT.to_string()))?;
        Ok(())
    }

    fn run(
        &self,
        name: &str,
        args: &[&str],
        work_dir: Option<&Path>,
        env: &[(&str, String)],
    ) -> Result<()> {
        debug!("Running: {} {}", name, args.join(" "));

        let mut cmd = Command::new(name);
        cmd.args(args);
        if let Some(dir) = work_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let status = cmd.status().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ToolNotFound(name.to_string()),
            _ => Error::IoError(format!("failed to spawn {name}: {e}")),
        })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                tool: name.to_string(),
                status,
            });
        }
        Ok(())
    }
}

impl ToolRunner for SystemRunner {
    fn run_version_control(&self, args: &[&str]) -> Result<()> {
        self.run(GIT, args, None, &[])
    }

    fn run_build(&self, work_dir: &Path, env: &[(&str, String)]) -> Result<()> {
        self.run(BUILD_SCRIPT, &[], Some(work_dir), env)
    }
}
