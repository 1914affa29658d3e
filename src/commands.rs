// src/commands.rs

//! Subcommand handlers.
//!
//! Each handler maps one CLI subcommand onto the core operations:
//! `init` runs the whole bootstrap chain, `add` re-enters branch+build
//! for a single version, `activate` only moves the active link, and
//! `list`/`available` pass the version-control tool's output through.

use crate::acquire::Acquirer;
use crate::error::{Error, Result};
use crate::repo::RepoManager;
use crate::tool::SystemRunner;
use crate::workspace::Workspace;
use tracing::info;

/// Versions installed by `init` when none are requested.
const DEFAULT_TAGS: &[&str] = &["go1.7", "go1.9"];

/// Create the workspace and install the initial set of versions.
pub fn init(workspace: &Workspace, tags: &[String]) -> Result<()> {
    SystemRunner::preflight()?;
    let runner = SystemRunner;
    let repo = RepoManager::new(workspace, &runner);

    workspace.create()?;

    info!("Acquiring bootstrap toolchain into {}", workspace.bootstrap_dir().display());
    Acquirer::new()?.acquire(&workspace.bootstrap_dir())?;

    repo.init_repository()?;

    let tags: Vec<&str> = if tags.is_empty() {
        DEFAULT_TAGS.to_vec()
    } else {
        tags.iter().map(String::as_str).collect()
    };
    for tag in &tags {
        repo.branch_and_build(tag)?;
    }

    // The newest seeded version becomes the active one.
    if let Some(last) = tags.last() {
        crate::activate::activate(workspace, last)?;
        println!("{last} activated");
    }
    Ok(())
}

/// Build one additional version into its own worktree.
pub fn add(workspace: &Workspace, tag: &str) -> Result<()> {
    SystemRunner::preflight()?;
    let runner = SystemRunner;
    RepoManager::new(workspace, &runner).branch_and_build(tag)
}

/// Repoint the active link.
pub fn activate(workspace: &Workspace, tag: &str) -> Result<()> {
    crate::activate::activate(workspace, tag)?;
    println!("{tag} activated");
    Ok(())
}

/// Show all worktrees known to the shared repository.
pub fn list(workspace: &Workspace) -> Result<()> {
    SystemRunner::preflight()?;
    let runner = SystemRunner;
    RepoManager::new(workspace, &runner).list_worktrees()
}

/// Show the release tags available upstream.
pub fn available(workspace: &Workspace) -> Result<()> {
    SystemRunner::preflight()?;
    let runner = SystemRunner;
    RepoManager::new(workspace, &runner).available_tags()
}

/// Print shell setup: the active link on PATH plus one alias per
/// installed version.
pub fn env(workspace: &Workspace) -> Result<()> {
    println!("export PATH=\"$PATH:{}\"", workspace.active_link().display());

    let entries = std::fs::read_dir(workspace.base_dir()).map_err(|e| {
        Error::IoError(format!(
            "failed to read {}: {e}",
            workspace.base_dir().display()
        ))
    })?;

    let mut tags: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name != "bin" && !name.starts_with('.'))
        .collect();
    tags.sort();

    for tag in tags {
        println!(
            "alias {}={}",
            tag,
            workspace.worktree_bin(&tag).join("go").display()
        );
    }
    Ok(())
}
