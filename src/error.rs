// src/error.rs

//! Central error type for gover operations.
//!
//! Every failure surfaces immediately to the top-level caller with a
//! one-line diagnostic; nothing is retried internally and no partial
//! state is rolled back. Idempotent re-invocation relies on the
//! artifacts a failed attempt leaves behind.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The running OS/architecture has no entry in the release table.
    #[error("unknown OS/architecture: {0}")]
    UnknownPlatform(String),

    /// The platform is known but no verified binary release is published
    /// for it. Not retryable; requires a new pinned release.
    #[error("no verified release published for {0}")]
    UnsupportedPlatform(String),

    /// Transport failure or non-200 response. Retryable by the caller.
    #[error("download failed: {0}")]
    DownloadError(String),

    /// The downloaded release does not match the pinned SHA-256. Signals
    /// a compromised or truncated download; the extracted tree must not
    /// be trusted.
    #[error("release SHA-256 mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// The release archive contained an entry that is neither a
    /// directory nor a regular file.
    #[error("unsupported archive entry type {kind} at {path}")]
    UnsupportedEntry { kind: String, path: PathBuf },

    /// An archive entry's path would escape the destination directory.
    #[error("archive entry escapes destination: {0}")]
    PathTraversal(PathBuf),

    /// A required external tool is not installed.
    #[error("required tool not found: {0}")]
    ToolNotFound(String),

    /// An external tool ran but exited non-zero. Its stdout/stderr were
    /// passed through to the terminal; nothing here interprets them.
    #[error("{tool} failed: {status}")]
    CommandFailed { tool: String, status: ExitStatus },

    /// Activation target has no built binaries.
    #[error("{0} has no built binaries (run `gover add {0}` first)")]
    NotBuilt(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
