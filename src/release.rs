// src/release.rs

//! The pinned bootstrap release and its per-platform digest table.
//!
//! Go builds itself from source, so the very first toolchain on a
//! machine has to come from a pre-built binary release. That release is
//! pinned to a single version, and its tarball digest is compiled in
//! per platform: the download is only trusted if the bytes on the wire
//! hash to the value recorded here. An empty digest means the platform
//! is known upstream but no verified binary is published for it.

use crate::error::{Error, Result};
use crate::platform::Platform;

/// Version of the pinned binary release used to bootstrap source builds.
pub const RELEASE_VERSION: &str = "1.9.2";

/// Upstream source repository cloned into the workspace.
pub const UPSTREAM_REPO: &str = "https://go.googlesource.com/go";

const DOWNLOAD_BASE: &str = "https://redirector.gvt1.com/edgedl/go";

/// Expected SHA-256 (lowercase hex) of the release tarball, keyed by
/// `os/arch`. Versioned together with [`RELEASE_VERSION`]; never
/// mutated at runtime.
static RELEASE_DIGESTS: &[(&str, &str)] = &[
    ("android/386", ""),
    ("android/amd64", ""),
    ("android/arm", ""),
    ("android/arm64", ""),
    ("darwin/386", ""),
    ("darwin/amd64", "73fd5840d55f5566d8db6c0ffdd187577e8ebe650c783f68bd27cbf95bde6743"),
    ("darwin/arm", ""),
    ("darwin/arm64", ""),
    ("dragonfly/amd64", ""),
    ("freebsd/386", "809dcb0a8457c8d0abf954f20311a1ee353486d0ae3f921e9478189721d37677"),
    ("freebsd/amd64", "8be985c3e251c8e007fa6ecd0189bc53e65cc519f4464ddf19fa11f7ed251134"),
    ("freebsd/arm", ""),
    ("linux/386", "574b2c4b1a248e58ef7d1f825beda15429610a2316d9cbd3096d8d3fa8c0bc1a"),
    ("linux/amd64", "de874549d9a8d8d8062be05808509c09a88a248e77ec14eb77453530829ac02b"),
    ("linux/arm", ""),
    ("linux/arm64", "0016ac65ad8340c84f51bc11dbb24ee8265b0a4597dbfdf8d91776fc187456fa"),
    ("linux/mips", ""),
    ("linux/mips64", ""),
    ("linux/mips64le", ""),
    ("linux/mipsle", ""),
    ("linux/ppc64", ""),
    ("linux/ppc64le", "adb440b2b6ae9e448c253a20836d8e8aa4236f731d87717d9c7b241998dc7f9d"),
    ("linux/s390x", "a7137b4fbdec126823a12a4b696eeee2f04ec616e9fb8a54654c51d5884c1345"),
    ("nacl/386", ""),
    ("nacl/amd64p32", ""),
    ("nacl/arm", ""),
    ("netbsd/386", ""),
    ("netbsd/amd64", ""),
    ("netbsd/arm", ""),
    ("openbsd/386", ""),
    ("openbsd/amd64", ""),
    ("openbsd/arm", ""),
    ("plan9/386", ""),
    ("plan9/amd64", ""),
    ("plan9/arm", ""),
    ("solaris/amd64", ""),
    ("windows/386", ""),
    ("windows/amd64", ""),
];

/// Look up the expected tarball digest for `platform`.
///
/// A platform missing from the table entirely is distinct from one
/// listed with an empty digest: the former is unknown, the latter is
/// known but has no published binary. Both are unsupported for
/// bootstrap purposes.
pub fn expected_digest(platform: &Platform) -> Result<&'static str> {
    let key = platform.key();
    match RELEASE_DIGESTS.iter().copied().find(|(dist, _)| *dist == key) {
        None => Err(Error::UnknownPlatform(key)),
        Some((_, digest)) if digest.is_empty() => Err(Error::UnsupportedPlatform(key)),
        Some((_, digest)) => Ok(digest),
    }
}

/// Download URL for the pinned release on `platform`.
pub fn download_url(platform: &Platform) -> String {
    format!(
        "{DOWNLOAD_BASE}/go{RELEASE_VERSION}.{}-{}.tar.gz",
        platform.os, platform.arch
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digests_are_lowercase_hex() {
        for (dist, digest) in RELEASE_DIGESTS {
            assert!(dist.contains('/'), "malformed dist key: {dist}");
            if digest.is_empty() {
                continue;
            }
            assert_eq!(digest.len(), 64, "bad digest length for {dist}");
            assert!(
                digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
                "digest for {dist} is not lowercase hex"
            );
        }
    }

    #[test]
    fn test_supported_platform_lookup() {
        let digest = expected_digest(&Platform::new("linux", "amd64")).unwrap();
        assert_eq!(
            digest,
            "de874549d9a8d8d8062be05808509c09a88a248e77ec14eb77453530829ac02b"
        );
    }

    #[test]
    fn test_unknown_platform() {
        let err = expected_digest(&Platform::new("linux", "riscv64")).unwrap_err();
        assert!(matches!(err, Error::UnknownPlatform(ref key) if key == "linux/riscv64"));
    }

    #[test]
    fn test_known_but_unsupported_platform() {
        let err = expected_digest(&Platform::new("linux", "arm")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform(ref key) if key == "linux/arm"));
    }

    #[test]
    fn test_download_url() {
        let url = download_url(&Platform::new("linux", "amd64"));
        assert_eq!(
            url,
            "https://redirector.gvt1.com/edgedl/go/go1.9.2.linux-amd64.tar.gz"
        );
    }
}
