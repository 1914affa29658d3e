// src/platform.rs

//! Platform identification in Go release naming.
//!
//! Release tarballs and the pinned digest table are keyed by Go's
//! `GOOS/GOARCH` spelling, which differs from Rust's
//! `std::env::consts` for several targets (`macos` vs `darwin`,
//! `x86_64` vs `amd64`). The mapping lives here so every other module
//! only ever sees the release spelling.

use std::env::consts;
use std::fmt;

/// The (OS, architecture) pair identifying which pinned release digest
/// applies. Immutable, derived once from the running environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: &'static str,
    pub arch: &'static str,
}

impl Platform {
    /// The platform this process is running on.
    pub fn current() -> Self {
        Self {
            os: go_os(consts::OS),
            arch: go_arch(consts::ARCH),
        }
    }

    pub const fn new(os: &'static str, arch: &'static str) -> Self {
        Self { os, arch }
    }

    /// Lookup key into the release digest table, e.g. `linux/amd64`.
    pub fn key(&self) -> String {
        format!("{}/{}", self.os, self.arch)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

fn go_os(os: &'static str) -> &'static str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

fn go_arch(arch: &'static str) -> &'static str {
    match arch {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "powerpc64" => "ppc64",
        other => other,
    }
}
