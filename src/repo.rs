// src/repo.rs

//! Shared bare repository and per-version worktrees.
//!
//! One bare clone of the upstream repository serves every installed
//! version. Each version gets its own branch (prefixed so it can never
//! collide with an upstream branch name) pointing at the release tag,
//! checked out into an isolated worktree, and built there with the
//! bootstrap toolchain. The bare repository is append-only: branches
//! are created but never deleted.

use crate::error::Result;
use crate::release;
use crate::tool::ToolRunner;
use crate::workspace::Workspace;
use tracing::info;

/// Prefix for branches owned by gover, keeping them clear of upstream
/// branch names.
const BRANCH_PREFIX: &str = "gover.";

/// Environment variable pointing the build at its bootstrap toolchain.
const BOOTSTRAP_ENV: &str = "GOROOT_BOOTSTRAP";

pub struct RepoManager<'a, R: ToolRunner> {
    workspace: &'a Workspace,
    runner: &'a R,
}

impl<'a, R: ToolRunner> RepoManager<'a, R> {
    pub fn new(workspace: &'a Workspace, runner: &'a R) -> Self {
        Self { workspace, runner }
    }

    /// Run the version-control client against the shared bare repository.
    fn git(&self, args: &[&str]) -> Result<()> {
        let git_dir = self.workspace.repo_dir().to_string_lossy().into_owned();
        let mut full: Vec<&str> = vec!["--git-dir", git_dir.as_str()];
        full.extend_from_slice(args);
        self.runner.run_version_control(&full)
    }

    /// Produce the shared bare clone of the upstream repository.
    pub fn init_repository(&self) -> Result<()> {
        let repo_dir = self.workspace.repo_dir().to_string_lossy().into_owned();
        info!("Cloning {} into {}", release::UPSTREAM_REPO, repo_dir);
        self.runner
            .run_version_control(&["clone", "--bare", release::UPSTREAM_REPO, &repo_dir])?;

        // A fresh bare clone's HEAD is a symbolic ref to the default
        // branch, which no worktree can be based on; pin HEAD to the
        // commit object it currently resolves to.
        self.git(&["update-ref", "--no-deref", "HEAD", "HEAD^{commit}"])
    }

    /// Create the branch and worktree for a version tag and build it.
    ///
    /// A worktree directory that already exists counts as satisfied and
    /// is skipped entirely: no duplicate branch, no rebuild. A failed
    /// earlier attempt leaves its artifacts behind, and this check is
    /// what makes re-invocation after cleanup (or success) cheap.
    pub fn branch_and_build(&self, tag: &str) -> Result<()> {
        let worktree = self.workspace.worktree_dir(tag);
        if worktree.exists() {
            info!("{} already present at {}, skipping", tag, worktree.display());
            return Ok(());
        }

        let branch = format!("{BRANCH_PREFIX}{tag}");
        self.git(&["branch", &branch, tag])?;

        let worktree_path = worktree.to_string_lossy().into_owned();
        self.git(&["worktree", "add", &worktree_path, &branch])?;

        let bootstrap = self.workspace.bootstrap_dir().to_string_lossy().into_owned();
        info!("Building {} with {}={}", tag, BOOTSTRAP_ENV, bootstrap);
        self.runner
            .run_build(&worktree.join("src"), &[(BOOTSTRAP_ENV, bootstrap)])
    }

    /// Enumerate all known worktrees; output passes straight through.
    pub fn list_worktrees(&self) -> Result<()> {
        self.git(&["worktree", "list"])
    }

    /// List the release tags available upstream.
    pub fn available_tags(&self) -> Result<()> {
        self.git(&["tag", "--list", "go*"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tool::ToolRunner;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Records every invocation; optionally fails on a matching arg.
    #[derive(Default)]
    struct FakeRunner {
        calls: RefCell<Vec<Vec<String>>>,
        builds: RefCell<Vec<(PathBuf, Vec<(String, String)>)>>,
        fail_on: Option<&'static str>,
    }

    impl FakeRunner {
        fn failing_on(arg: &'static str) -> Self {
            Self {
                fail_on: Some(arg),
                ..Self::default()
            }
        }
    }

    impl ToolRunner for FakeRunner {
        fn run_version_control(&self, args: &[&str]) -> crate::error::Result<()> {
            let call: Vec<String> = args.iter().map(|s| s.to_string()).collect();
            self.calls.borrow_mut().push(call);
            if let Some(trigger) = self.fail_on {
                if args.contains(&trigger) {
                    return Err(Error::ToolNotFound("git".to_string()));
                }
            }
            Ok(())
        }

        fn run_build(&self, work_dir: &Path, env: &[(&str, String)]) -> crate::error::Result<()> {
            let env: Vec<(String, String)> =
                env.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
            self.builds.borrow_mut().push((work_dir.to_path_buf(), env));
            Ok(())
        }
    }

    #[test]
    fn test_init_repository_clones_then_pins_head() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        let runner = FakeRunner::default();

        RepoManager::new(&ws, &runner).init_repository().unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0][..3], ["clone", "--bare", release::UPSTREAM_REPO].map(String::from));
        assert_eq!(calls[1][0], "--git-dir");
        assert_eq!(
            calls[1][2..],
            ["update-ref", "--no-deref", "HEAD", "HEAD^{commit}"].map(String::from)
        );
    }

    #[test]
    fn test_branch_and_build_full_sequence() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        let runner = FakeRunner::default();

        RepoManager::new(&ws, &runner).branch_and_build("go1.9").unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0][2..], ["branch", "gover.go1.9", "go1.9"].map(String::from));
        assert_eq!(calls[1][2], "worktree");
        assert_eq!(calls[1][3], "add");
        assert_eq!(calls[1][5], "gover.go1.9");

        let builds = runner.builds.borrow();
        assert_eq!(builds.len(), 1);
        assert_eq!(builds[0].0, ws.worktree_dir("go1.9").join("src"));
        assert_eq!(
            builds[0].1,
            vec![(
                "GOROOT_BOOTSTRAP".to_string(),
                ws.bootstrap_dir().to_string_lossy().into_owned()
            )]
        );
    }

    #[test]
    fn test_branch_and_build_skips_existing_worktree() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        std::fs::create_dir_all(ws.worktree_dir("go1.9")).unwrap();
        let runner = FakeRunner::default();

        RepoManager::new(&ws, &runner).branch_and_build("go1.9").unwrap();

        assert!(runner.calls.borrow().is_empty());
        assert!(runner.builds.borrow().is_empty());
    }

    #[test]
    fn test_branch_failure_stops_before_worktree() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        let runner = FakeRunner::failing_on("branch");

        let result = RepoManager::new(&ws, &runner).branch_and_build("go1.9");

        assert!(result.is_err());
        assert_eq!(runner.calls.borrow().len(), 1);
        assert!(runner.builds.borrow().is_empty());
    }

    #[test]
    fn test_list_and_available_delegate_to_git() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        let runner = FakeRunner::default();
        let repo = RepoManager::new(&ws, &runner);

        repo.list_worktrees().unwrap();
        repo.available_tags().unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls[0][2..], ["worktree", "list"].map(String::from));
        assert_eq!(calls[1][2..], ["tag", "--list", "go*"].map(String::from));
    }
}
