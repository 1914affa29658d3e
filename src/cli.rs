// src/cli.rs

//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gover")]
#[command(author, version, about = "Go toolchain version manager", long_about = None)]
pub struct Cli {
    /// Workspace base directory (default: ~/.gover)
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the workspace: fetch the bootstrap release, clone the
    /// upstream repository, and build the initial versions
    Init {
        /// Version tags to install (default: go1.7 go1.9)
        tags: Vec<String>,
    },
    /// Branch, check out, and build one version from source
    Add {
        /// Release tag, e.g. go1.9
        tag: String,
    },
    /// Point the active `bin` link at an installed version
    Activate {
        /// Release tag, e.g. go1.9
        tag: String,
    },
    /// List installed worktrees
    List,
    /// List release tags available upstream
    Available,
    /// Print shell setup for the active toolchain
    Env,
}
