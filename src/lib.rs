// src/lib.rs

//! gover: Go toolchain version manager
//!
//! Builds Go versions from source in isolated git worktrees that share
//! one bare clone of the upstream repository, bootstrapped by a
//! digest-verified binary release, and switches the active version
//! through a single `bin` symlink.
//!
//! # Architecture
//!
//! - Verified acquisition: the bootstrap tarball streams through
//!   SHA-256 digesting, gzip decompression, and tar extraction in one
//!   pass; the digest over the raw compressed bytes must match a
//!   compiled-in pinned value.
//! - Shared history, isolated checkouts: one bare repository, one
//!   prefixed branch and worktree per installed version.
//! - Single activation point: a `bin` symlink at the workspace root
//!   selects the version in effect.

pub mod acquire;
pub mod activate;
pub mod cli;
pub mod commands;
pub mod digest;
mod error;
pub mod extract;
pub mod platform;
pub mod release;
pub mod repo;
pub mod tool;
pub mod workspace;

pub use error::{Error, Result};
